use kanjidic_config::parser::{InvalidEntryPolicy, ParserConfig};
use kanjidic_core::{Character, EntryError, KanjidicError, Version};

use crate::character::decode_character;
use crate::version::decode_version;
use crate::xml::{self, Element};

/// A KANJIDIC2 document split into its header and entries.
///
/// The first child of the root is the header, every later child is an entry.
/// Nothing is decoded until asked for.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn parse(xml: &str) -> Result<Self, KanjidicError> {
        let root = xml::parse(xml)?;
        if root.children.is_empty() {
            return Err(KanjidicError::Document(format!(
                "<{}> has no header element",
                root.name
            )));
        }
        Ok(Self { root })
    }

    pub fn version(&self) -> Version {
        decode_version(&self.root.children[0])
    }

    pub fn character_count(&self) -> usize {
        self.root.children.len() - 1
    }

    /// Decode entries lazily, in document order.
    ///
    /// A failed entry yields its error and does not stop the iterator.
    pub fn characters(&self) -> impl Iterator<Item = Result<Character, EntryError>> + '_ {
        self.root.children[1..]
            .iter()
            .enumerate()
            .map(|(i, el)| decode_character(el, i + 1))
    }
}

/// Fully decoded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub version: Version,
    pub characters: Vec<Character>,
    /// Entries dropped under [`InvalidEntryPolicy::Skip`]
    pub rejected: Vec<EntryError>,
}

/// Parse a whole KANJIDIC2 document.
///
/// With [`InvalidEntryPolicy::Fail`] the first bad entry aborts the parse;
/// with [`InvalidEntryPolicy::Skip`] it is logged, collected in
/// [`ParsedDocument::rejected`] and decoding moves on.
pub fn parse_document(xml: &str, config: &ParserConfig) -> Result<ParsedDocument, KanjidicError> {
    let document = Document::parse(xml)?;
    let version = document.version();

    let mut characters = Vec::with_capacity(document.character_count());
    let mut rejected = Vec::new();

    for result in document.characters() {
        match result {
            Ok(character) => characters.push(character),
            Err(e) => match config.on_invalid_entry {
                InvalidEntryPolicy::Fail => return Err(e.into()),
                InvalidEntryPolicy::Skip => {
                    tracing::warn!("Skipping entry: {e}");
                    rejected.push(e);
                }
            },
        }
    }

    tracing::debug!(
        characters = characters.len(),
        rejected = rejected.len(),
        "Decoded KANJIDIC2 document"
    );

    Ok(ParsedDocument {
        version,
        characters,
        rejected,
    })
}
