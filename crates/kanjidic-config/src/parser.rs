use serde::{Deserialize, Serialize};

/// What to do with an entry that fails to decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidEntryPolicy {
    /// Abort the whole parse on the first bad entry
    #[default]
    Fail,
    /// Record the error and keep going
    Skip,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub on_invalid_entry: InvalidEntryPolicy,
}

impl ParserConfig {
    pub fn skipping() -> Self {
        Self {
            on_invalid_entry: InvalidEntryPolicy::Skip,
        }
    }
}
