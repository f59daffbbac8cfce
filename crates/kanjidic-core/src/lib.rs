pub mod dictionary;
pub mod error;
pub mod schema;
pub mod types;

pub use error::{EntryError, KanjidicError};
pub use types::{
    Character, Codepoint, DicNumber, DicRef, KeyedMap, Misc, Misclassification, QueryCode,
    Radical, ReadingMeaning, Version,
};
