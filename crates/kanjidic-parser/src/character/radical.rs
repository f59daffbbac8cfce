use kanjidic_core::{EntryError, Radical};

use super::parse_number;
use crate::xml::Element;

pub(crate) fn decode(el: &Element, literal: &str, radical: &mut Radical) -> Result<(), EntryError> {
    for value in &el.children {
        let Some(rad_type) = value.attr("rad_type") else {
            tracing::debug!(literal, tag = %value.name, "Radical value without rad_type");
            continue;
        };
        let number = parse_number(value, literal, &format!("radical.{rad_type}"))?;
        radical.set(rad_type, number);
    }
    Ok(())
}
