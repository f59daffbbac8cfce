use kanjidic_core::schema::{MORO, MORO_PLACE_ATTRS};
use kanjidic_core::{DicNumber, DicRef, KeyedMap};

use crate::xml::Element;

/// Decode `dic_ref` children.
///
/// The output shape depends on the key: `moro` references become
/// [`DicRef::Moro`] carrying every other attribute of the element as the
/// volume/page location, all other dictionaries are [`DicRef::Plain`]. An
/// empty element leaves the key unset for either shape.
pub(crate) fn decode(el: &Element, literal: &str, dic_number: &mut DicNumber) {
    for dic_ref in &el.children {
        let Some(dr_type) = dic_ref.attr("dr_type") else {
            tracing::debug!(literal, "Dictionary reference without dr_type");
            continue;
        };

        let value = dic_ref.text().map(|text| {
            if dr_type == MORO {
                let attrs = dic_ref
                    .attributes
                    .iter()
                    .filter(|(key, _)| key != "dr_type")
                    .cloned();
                DicRef::Moro {
                    number: text.to_string(),
                    place: KeyedMap::seeded_with(MORO_PLACE_ATTRS, attrs),
                }
            } else {
                DicRef::Plain(text.to_string())
            }
        });

        dic_number.set(dr_type, value);
    }
}
