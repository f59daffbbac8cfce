use kanjidic_core::Codepoint;

use crate::xml::Element;

pub(crate) fn decode(el: &Element, codepoint: &mut Codepoint) {
    for value in &el.children {
        match value.attr("cp_type") {
            Some(cp_type) => codepoint.set(cp_type, value.text().map(str::to_string)),
            None => tracing::debug!(tag = %value.name, "Codepoint value without cp_type"),
        }
    }
}
