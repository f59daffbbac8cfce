use kanjidic_core::{Misclassification, QueryCode};

use crate::xml::Element;

pub(crate) fn decode(el: &Element, literal: &str, query_code: &mut QueryCode) {
    for q_code in &el.children {
        let text = q_code.text();

        if let Some(kind) = q_code.attr("skip_misclass") {
            let misclass = Misclassification::from_kind(kind, text.unwrap_or_default());
            if matches!(misclass, Misclassification::Other { .. }) {
                tracing::debug!(literal, kind, "Unknown skip_misclass kind");
            }
            query_code.misclass.push(misclass);
            continue;
        }

        match q_code.attr("qc_type") {
            Some(qc_type) => query_code.codes.set(qc_type, text.map(str::to_string)),
            None => tracing::debug!(literal, "Query code without qc_type"),
        }
    }
}
