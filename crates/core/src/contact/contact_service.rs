use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::constants::{SUBMIT_SUCCESS_MESSAGE, TOAST_DISMISS_MS};
use crate::contact::contact_rules;
use crate::contact::{FieldInput, FieldKind, FieldState, SubmitOutcome};

const MESSAGE_FIELD: &str = "message";

/// State machine for one contact form.
///
/// Starts pristine; `touch` validates and marks individual fields as the
/// user types, `submit` validates every present input at once. An
/// accepted submission clears all field state and sets the success
/// feedback; a rejected one keeps everything and blanks the feedback.
#[derive(Default)]
pub struct ContactFormSession {
    fields: Vec<FieldState>,
    feedback: Option<String>,
    message_auto_filled: bool,
}

impl ContactFormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a single field on input/blur/change and records its
    /// marking. Returns whether the value passed.
    pub fn touch(&mut self, name: &str, value: &str) -> bool {
        let kind = FieldKind::from_name(name);
        let valid = contact_rules::validate(kind, value);

        // A manual edit to the message drops the auto-fill marker.
        if name == MESSAGE_FIELD && !self.message_auto_filled_value_matches(value) {
            self.message_auto_filled = false;
        }

        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.to_string();
                field.invalid = !valid;
            }
            None => self.fields.push(FieldState {
                name: name.to_string(),
                kind,
                value: value.to_string(),
                invalid: !valid,
            }),
        }
        valid
    }

    fn message_auto_filled_value_matches(&self, incoming: &str) -> bool {
        self.message_value().is_some_and(|v| v == incoming)
    }

    /// Validates every present input. All-or-nothing: one failure keeps
    /// all entered values and blanks the feedback area.
    pub fn submit(&mut self, inputs: &[FieldInput]) -> SubmitOutcome {
        let mut invalid_fields = Vec::new();
        for input in inputs {
            if !self.touch(&input.name, &input.value) {
                invalid_fields.push(input.name.clone());
            }
        }

        if !invalid_fields.is_empty() {
            debug!("Submission rejected, invalid fields: {:?}", invalid_fields);
            self.feedback = None;
            return SubmitOutcome::Rejected { invalid_fields };
        }

        self.fields.clear();
        self.message_auto_filled = false;
        self.feedback = Some(SUBMIT_SUCCESS_MESSAGE.to_string());
        SubmitOutcome::Accepted {
            success_message: SUBMIT_SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Seeds the message field with package text, but only over an empty
    /// message or one this mechanism wrote earlier. Manual edits win.
    pub fn apply_auto_fill(&mut self, text: &str) -> bool {
        let current_is_blank = self
            .message_value()
            .map(|v| v.trim().is_empty())
            .unwrap_or(true);
        if !current_is_blank && !self.message_auto_filled {
            return false;
        }

        self.write_field(MESSAGE_FIELD, text);
        self.message_auto_filled = true;
        true
    }

    /// Clears an auto-filled message when the package selection goes
    /// away. A manually written message stays.
    pub fn clear_auto_filled_message(&mut self) -> bool {
        if !self.message_auto_filled {
            return false;
        }
        self.write_field(MESSAGE_FIELD, "");
        self.message_auto_filled = false;
        true
    }

    /// Programmatic write: stores the value without validity marking,
    /// like a script assignment that fires no input event.
    fn write_field(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.to_string();
                field.invalid = false;
            }
            None => self.fields.push(FieldState {
                name: name.to_string(),
                kind: FieldKind::from_name(name),
                value: value.to_string(),
                invalid: false,
            }),
        }
    }

    pub fn message_value(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == MESSAGE_FIELD)
            .map(|f| f.value.as_str())
    }

    pub fn is_message_auto_filled(&self) -> bool {
        self.message_auto_filled
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.invalid)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Success feedback text; `None` renders as a blank feedback area.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

/// Success toast with a self-dismissing timer.
///
/// Each `show` re-arms the dismissal: a pending timer is cancelled and
/// replaced, so the toast always stays up for the full delay after the
/// latest submission. Must run inside a Tokio runtime.
pub struct ToastController {
    visible: Arc<AtomicBool>,
    dismiss_after: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for ToastController {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastController {
    pub fn new() -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(false)),
            dismiss_after: Duration::from_millis(TOAST_DISMISS_MS),
            pending: None,
        }
    }

    /// Overrides the dismissal delay.
    pub fn with_dismiss_delay(mut self, delay: Duration) -> Self {
        self.dismiss_after = delay;
        self
    }

    /// Shows the toast and (re)arms the dismissal timer.
    pub fn show(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        self.visible.store(true, Ordering::SeqCst);
        let visible = Arc::clone(&self.visible);
        let delay = self.dismiss_after;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            visible.store(false, Ordering::SeqCst);
        }));
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl Drop for ToastController {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
