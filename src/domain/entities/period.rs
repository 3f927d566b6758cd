use serde::Serialize;

/// Display strings derived from an experience's dates. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodLabel {
    pub duration_text: String,
    pub range_text: String,
    pub combined: String,
}
