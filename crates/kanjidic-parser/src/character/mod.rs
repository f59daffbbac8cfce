//! Decoding of `character` elements.
//!
//! Each entry is decoded on its own; nothing carries over between entries.
//! Every sub-decoder owns one child subtree of the entry and writes into the
//! matching, freshly seeded, part of the [`Character`].

mod codepoint;
mod dic_number;
mod misc;
mod query_code;
mod radical;
mod reading_meaning;

use kanjidic_core::{Character, EntryError};

use crate::xml::Element;

/// Decode one `character` element.
///
/// `position` is the 1-based index of the element among the document's
/// entries and is only used to identify entries that have no literal.
pub fn decode_character(el: &Element, position: usize) -> Result<Character, EntryError> {
    // literal first, so errors in any other field can name the entry
    let literal = el
        .child("literal")
        .and_then(Element::text)
        .ok_or(EntryError::MissingField {
            field: "literal",
            position,
        })?;

    let mut character = Character::new(literal);

    for child in &el.children {
        match child.name.as_str() {
            "literal" => {}
            "codepoint" => codepoint::decode(child, &mut character.codepoint),
            "radical" => radical::decode(child, literal, &mut character.radical)?,
            "misc" => misc::decode(child, literal, &mut character.misc)?,
            "dic_number" => dic_number::decode(child, literal, &mut character.dic_number),
            "query_code" => query_code::decode(child, literal, &mut character.query_code),
            "reading_meaning" => {
                reading_meaning::decode(child, literal, &mut character.reading_meaning)
            }
            other => tracing::debug!(literal, tag = other, "Ignoring unknown character element"),
        }
    }

    Ok(character)
}

/// Integer content of `el`; empty text is `None`
fn parse_number(el: &Element, literal: &str, field: &str) -> Result<Option<u32>, EntryError> {
    let Some(text) = el.text() else {
        return Ok(None);
    };

    text.parse::<u32>()
        .map(Some)
        .map_err(|_| EntryError::Format {
            literal: literal.to_string(),
            field: field.to_string(),
            value: text.to_string(),
        })
}
