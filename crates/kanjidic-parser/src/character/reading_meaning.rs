use kanjidic_core::ReadingMeaning;
use kanjidic_core::schema::DEFAULT_MEANING_LANG;

use crate::xml::Element;

/// Decode `rmgroup` and `nanori` children.
///
/// Groups accumulate into the same maps: meanings and nanori append, while a
/// reading type seen again replaces the earlier value in `reading`. Every
/// reading is still kept in `all_readings`.
pub(crate) fn decode(el: &Element, literal: &str, rm: &mut ReadingMeaning) {
    for group in &el.children {
        match group.name.as_str() {
            "rmgroup" => decode_group(group, literal, rm),
            "nanori" => rm.nanori.push(group.text().unwrap_or_default().to_string()),
            other => tracing::debug!(literal, tag = other, "Ignoring unknown reading_meaning element"),
        }
    }
}

fn decode_group(group: &Element, literal: &str, rm: &mut ReadingMeaning) {
    for item in &group.children {
        match item.name.as_str() {
            "reading" => {
                let Some(r_type) = reading_type(item) else {
                    tracing::debug!(literal, "Reading without r_type");
                    continue;
                };
                let value = item.text().map(str::to_string);
                if let Some(value) = &value {
                    rm.all_readings
                        .entry(r_type.to_string())
                        .or_default()
                        .push(value.clone());
                }
                rm.reading.set(r_type, value);
            }
            "meaning" => {
                let lang = item.attr("m_lang").unwrap_or(DEFAULT_MEANING_LANG);
                rm.meaning
                    .entry(lang.to_string())
                    .or_default()
                    .push(item.text().unwrap_or_default().to_string());
            }
            other => tracing::debug!(literal, tag = other, "Ignoring unknown rmgroup element"),
        }
    }
}

/// `r_type`, or the first attribute when the element is unlabeled that way
fn reading_type(reading: &Element) -> Option<&str> {
    reading
        .attr("r_type")
        .or_else(|| reading.attributes.first().map(|(_, value)| value.as_str()))
}
