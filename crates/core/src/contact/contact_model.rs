use serde::{Deserialize, Serialize};

/// Kind of a contact form field, resolved from the input's name.
///
/// Inputs whose name is not recognized get [`FieldKind::Unknown`] and
/// always validate, so extra markup never blocks a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    FullName,
    Company,
    Email,
    Phone,
    Message,
    Package,
    Unknown,
}

impl FieldKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fullName" => Self::FullName,
            "company" => Self::Company,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "message" => Self::Message,
            "package" => Self::Package,
            _ => Self::Unknown,
        }
    }
}

/// One raw input as submitted by the embedding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldInput {
    pub name: String,
    pub value: String,
}

impl FieldInput {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Tracked state of one touched field.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub invalid: bool,
}

/// Result of processing a full-form submission.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Every present input validated; the form was cleared.
    Accepted { success_message: String },
    /// At least one input failed; nothing was cleared.
    Rejected { invalid_fields: Vec<String> },
}
