use std::collections::HashMap;

use kanjidic_core::Character;
use kanjidic_core::dictionary::{Dictionary, DictionaryMetadata};
use kanjidic_core::types::Version;

use crate::document::ParsedDocument;

/// Parsed KANJIDIC2 with literal and reading indices
pub struct Kanjidic {
    version: Version,
    entries: Vec<Character>,
    literal_index: HashMap<String, usize>,
    reading_index: HashMap<String, Vec<usize>>,
}

impl Kanjidic {
    pub fn new(version: Version, entries: Vec<Character>) -> Self {
        let mut literal_index = HashMap::new();
        let mut reading_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            if literal_index.contains_key(&entry.literal) {
                tracing::debug!(literal = %entry.literal, "Duplicate literal, keeping first entry");
            } else {
                literal_index.insert(entry.literal.clone(), idx);
            }

            let rm = &entry.reading_meaning;
            let readings = rm.all_readings.values().flatten().chain(rm.nanori.iter());
            for reading in readings {
                let bare = bare_reading(reading);
                if bare != *reading {
                    reading_index.entry(bare).or_default().push(idx);
                }
                reading_index.entry(reading.clone()).or_default().push(idx);
            }
        }

        for indices in reading_index.values_mut() {
            indices.sort_unstable();
            indices.dedup();
        }

        Self {
            version,
            entries,
            literal_index,
            reading_index,
        }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl From<ParsedDocument> for Kanjidic {
    fn from(parsed: ParsedDocument) -> Self {
        Self::new(parsed.version, parsed.characters)
    }
}

/// Reading without okurigana (`.`) and affix (`-`) markers: `ひと.つ` -> `ひとつ`
fn bare_reading(reading: &str) -> String {
    reading.chars().filter(|c| *c != '.' && *c != '-').collect()
}

impl Dictionary for Kanjidic {
    fn lookup(&self, literal: &str) -> Option<&Character> {
        self.literal_index
            .get(literal)
            .and_then(|&idx| self.entries.get(idx))
    }

    fn search_reading(&self, reading: &str) -> Vec<&Character> {
        self.reading_index
            .get(reading)
            .map(|indices| {
                indices
                    .iter()
                    .filter_map(|&idx| self.entries.get(idx))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = &Character> + '_> {
        Box::new(self.entries.iter())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "KANJIDIC2".to_string(),
            version: self.version.clone(),
            entry_count: self.entries.len(),
        }
    }
}
