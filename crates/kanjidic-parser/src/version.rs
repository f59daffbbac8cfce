use kanjidic_core::Version;

use crate::xml::Element;

/// Decode the dictionary header. Unknown children are ignored.
pub fn decode_version(header: &Element) -> Version {
    let mut version = Version::default();

    for el in &header.children {
        let text = el.text().map(str::to_string);
        match el.name.as_str() {
            "file_version" => version.file_version = text,
            "database_version" => version.database_version = text,
            "date_of_creation" => version.date_of_creation = text,
            other => tracing::debug!(tag = other, "Ignoring unknown header element"),
        }
    }

    version
}
