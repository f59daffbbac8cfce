/// Failure to decode one `character` element.
///
/// The rest of the document is unaffected; callers may skip the entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("Entry #{position} has no `{field}` element")]
    MissingField { field: &'static str, position: usize },

    #[error("Entry {literal}: `{field}` is not a number: {value:?}")]
    Format {
        literal: String,
        field: String,
        value: String,
    },
}

impl EntryError {
    /// Literal of the failed entry, when it got that far
    pub fn literal(&self) -> Option<&str> {
        match self {
            EntryError::MissingField { .. } => None,
            EntryError::Format { literal, .. } => Some(literal),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            EntryError::MissingField { field, .. } => field,
            EntryError::Format { field, .. } => field,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KanjidicError {
    #[error("Malformed document: {0}")]
    Document(String),

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
