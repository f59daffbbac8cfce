pub mod character;
pub mod dictionary;
pub mod document;
pub mod loader;
pub mod version;
pub mod xml;

pub use character::decode_character;
pub use dictionary::Kanjidic;
pub use document::{Document, ParsedDocument, parse_document};
pub use loader::KanjidicLoader;
pub use version::decode_version;
