use crate::types::{Character, Version};

/// Lookup operations over a loaded kanji dictionary
pub trait Dictionary {
    /// Entry whose literal is exactly `literal`
    fn lookup(&self, literal: &str) -> Option<&Character>;

    /// Entries with `reading` among their readings or nanori, in document order
    fn search_reading(&self, reading: &str) -> Vec<&Character>;

    /// Iterate every entry in document order
    fn entries(&self) -> Box<dyn Iterator<Item = &Character> + '_>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: Version,
    pub entry_count: usize,
}
