/// Storage key for the persisted region preference
pub const CURRENCY_PREFERENCE_KEY: &str = "selectedCurrency";

/// Feedback shown after an accepted submission
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Thank you for submitting the form. Our team will call you shortly.";

/// How long the success toast stays visible
pub const TOAST_DISMISS_MS: u64 = 5_000;

/// Total duration of a counter animation
pub const COUNTER_DURATION_MS: u64 = 1_500;

/// Lower bound on the counter tick interval
pub const COUNTER_MIN_STEP_MS: u64 = 20;

/// Suffix appended to a package's monthly price
pub const PER_MONTH_SUFFIX: &str = " / month";
