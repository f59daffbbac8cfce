use kanjidic_core::{EntryError, Misc};

use super::parse_number;
use crate::xml::Element;

pub(crate) fn decode(el: &Element, literal: &str, misc: &mut Misc) -> Result<(), EntryError> {
    for field in &el.children {
        match field.name.as_str() {
            "grade" => misc.grade = parse_number(field, literal, "grade")?,
            "stroke_count" => {
                // The first count is the accepted one, any others are common miscounts
                let count = parse_number(field, literal, "stroke_count")?;
                match (misc.stroke_count, count) {
                    (None, count) => misc.stroke_count = count,
                    (Some(_), Some(miscount)) => misc.stroke_miscounts.push(miscount),
                    (Some(_), None) => {}
                }
            }
            "freq" => misc.freq = parse_number(field, literal, "freq")?,
            "jlpt" => misc.jlpt = parse_number(field, literal, "jlpt")?,
            "rad_name" => misc.rad_name = field.text().map(str::to_string),
            "variant" => match field.attr("var_type") {
                Some(var_type) => {
                    let code = field.text().unwrap_or_default().to_string();
                    misc.all_variants
                        .entry(var_type.to_string())
                        .or_default()
                        .push(code.clone());
                    misc.variant.insert(var_type.to_string(), code);
                }
                None => tracing::debug!(literal, "Variant without var_type"),
            },
            other => tracing::debug!(literal, tag = other, "Ignoring unknown misc element"),
        }
    }
    Ok(())
}
