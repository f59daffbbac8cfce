use std::path::Path;

use kanjidic_config::parser::ParserConfig;
use kanjidic_core::KanjidicError;

use crate::dictionary::Kanjidic;
use crate::document::{ParsedDocument, parse_document};

pub struct KanjidicLoader;

impl KanjidicLoader {
    /// Parse KANJIDIC2 text already in memory
    pub fn from_str(xml: &str, config: &ParserConfig) -> Result<ParsedDocument, KanjidicError> {
        let parsed = parse_document(xml, config)?;
        tracing::info!("Loaded {} kanji entries", parsed.characters.len());
        Ok(parsed)
    }

    /// Load KANJIDIC2 from file path
    pub fn load_from_file(
        path: &Path,
        config: &ParserConfig,
    ) -> Result<ParsedDocument, KanjidicError> {
        tracing::info!("Loading KANJIDIC2 from file: {}", path.display());
        let xml = std::fs::read_to_string(path)?;
        let parsed = parse_document(&xml, config)?;
        tracing::info!(
            entries = parsed.characters.len(),
            rejected = parsed.rejected.len(),
            "Loaded kanji entries from file"
        );
        Ok(parsed)
    }

    /// Load a file and index it for lookups
    pub fn load_dictionary(path: &Path, config: &ParserConfig) -> Result<Kanjidic, KanjidicError> {
        Self::load_from_file(path, config).map(Kanjidic::from)
    }
}
