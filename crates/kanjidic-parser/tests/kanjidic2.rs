use assert_matches::assert_matches;
use kanjidic_config::parser::ParserConfig;
use kanjidic_core::schema;
use kanjidic_core::{DicRef, EntryError, KanjidicError, KeyedMap, Misclassification};
use kanjidic_parser::{Document, KanjidicLoader, parse_document};

const KANJIDIC2: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE kanjidic2 [
	<!ELEMENT kanjidic2 (header,character*)>
	<!ELEMENT header (file_version,database_version,date_of_creation)>
]>
<kanjidic2>
<header>
<file_version>4</file_version>
<database_version>2024-123</database_version>
<date_of_creation>2024-05-02</date_of_creation>
</header>
<!-- Entry for Kanji: 一 -->
<character>
<literal>一</literal>
<codepoint>
<cp_value cp_type="ucs">4e00</cp_value>
<cp_value cp_type="jis208">1-16-76</cp_value>
</codepoint>
<radical>
<rad_value rad_type="classical">1</rad_value>
</radical>
<misc>
<grade>1</grade>
<stroke_count>1</stroke_count>
<freq>2</freq>
<jlpt>4</jlpt>
</misc>
<dic_number>
<dic_ref dr_type="nelson_c">1</dic_ref>
<dic_ref dr_type="moro" m_vol="1" m_page="0001">1</dic_ref>
<dic_ref dr_type="heisig">1</dic_ref>
</dic_number>
<query_code>
<q_code qc_type="skip">4-1-4</q_code>
<q_code qc_type="four_corner">1000.0</q_code>
</query_code>
<reading_meaning>
<rmgroup>
<reading r_type="pinyin">yi1</reading>
<reading r_type="korean_r">il</reading>
<reading r_type="ja_on">イチ</reading>
<reading r_type="ja_on">イツ</reading>
<reading r_type="ja_kun">ひと-</reading>
<reading r_type="ja_kun">ひと.つ</reading>
<meaning>one</meaning>
<meaning>one radical (no.1)</meaning>
<meaning m_lang="fr">un</meaning>
<meaning m_lang="es">uno</meaning>
<meaning m_lang="pt">um</meaning>
</rmgroup>
<nanori>かず</nanori>
<nanori>い</nanori>
<nanori>いっ</nanori>
</reading_meaning>
</character>
<!-- Entry for Kanji: 丂 -->
<character>
<literal>丂</literal>
<codepoint>
<cp_value cp_type="ucs">4e02</cp_value>
<cp_value cp_type="jis212">1-16-02</cp_value>
</codepoint>
<radical>
<rad_value rad_type="classical">1</rad_value>
</radical>
<misc>
<stroke_count>2</stroke_count>
</misc>
<dic_number>
<dic_ref dr_type="moro" m_vol="1" m_page="0018">14</dic_ref>
</dic_number>
<query_code>
<q_code qc_type="skip">4-2-1</q_code>
<q_code qc_type="skip" skip_misclass="posn">1-1-1</q_code>
<q_code qc_type="skip" skip_misclass="stroke_count">4-1-1</q_code>
</query_code>
</character>
<!-- Entry for Kanji: 亜 -->
<character>
<literal>亜</literal>
<codepoint>
<cp_value cp_type="ucs">4e9c</cp_value>
</codepoint>
<misc>
<grade>8</grade>
<stroke_count>7</stroke_count>
<variant var_type="jis208">1-48-19</variant>
<variant var_type="jis208">1-48-20</variant>
</misc>
<dic_number>
<dic_ref dr_type="moro">272P</dic_ref>
</dic_number>
<query_code>
<q_code qc_type="skip" skip_misclass="new_kind">1-4-3</q_code>
</query_code>
<reading_meaning>
<rmgroup>
<meaning>Asia</meaning>
<meaning>rank next</meaning>
</rmgroup>
</reading_meaning>
</character>
</kanjidic2>
"#;

#[test]
fn test_entries_in_document_order() {
    let parsed = parse_document(KANJIDIC2, &ParserConfig::default()).unwrap();

    let literals: Vec<_> = parsed.characters.iter().map(|c| c.literal.as_str()).collect();
    assert_eq!(literals, ["一", "丂", "亜"]);
    assert!(parsed.rejected.is_empty());

    assert_eq!(parsed.version.file_version.as_deref(), Some("4"));
    assert_eq!(parsed.version.database_version.as_deref(), Some("2024-123"));
    assert_eq!(parsed.version.date_of_creation.as_deref(), Some("2024-05-02"));
}

#[test]
fn test_every_seeded_key_present() {
    let parsed = parse_document(KANJIDIC2, &ParserConfig::default()).unwrap();

    for ch in &parsed.characters {
        for key in schema::CODEPOINT_TYPES {
            assert!(ch.codepoint.contains_key(key), "{} codepoint {key}", ch.literal);
        }
        for key in schema::RADICAL_TYPES {
            assert!(ch.radical.contains_key(key), "{} radical {key}", ch.literal);
        }
        for key in schema::DIC_REF_TYPES {
            assert!(ch.dic_number.contains_key(key), "{} dic_ref {key}", ch.literal);
        }
        for key in schema::QUERY_CODE_TYPES {
            assert!(ch.query_code.codes.contains_key(key), "{} q_code {key}", ch.literal);
        }
        for key in schema::READING_TYPES {
            assert!(ch.reading_meaning.reading.contains_key(key), "{} reading {key}", ch.literal);
        }
        for lang in schema::MEANING_LANGS {
            assert!(ch.reading_meaning.meaning.contains_key(*lang), "{} meaning {lang}", ch.literal);
        }
    }

    // 丂 has no reading_meaning element at all
    let ch = &parsed.characters[1];
    assert_eq!(ch.reading_meaning.reading.get("ja_on"), None);
    assert!(ch.reading_meaning.meanings("en").is_empty());
    assert!(ch.reading_meaning.nanori.is_empty());
    assert_eq!(ch.misc.grade, None);
    assert!(ch.misc.variant.is_empty());
}

#[test]
fn test_first_entry_fields() {
    let parsed = parse_document(KANJIDIC2, &ParserConfig::default()).unwrap();
    let ch = &parsed.characters[0];

    assert_eq!(ch.codepoint.get("ucs").map(String::as_str), Some("4e00"));
    assert_eq!(ch.codepoint.get("jis212"), None);
    assert_eq!(ch.radical.get("classical"), Some(&1));
    assert_eq!(ch.radical.get("nelson_c"), None);
    assert_eq!(ch.misc.grade, Some(1));
    assert_eq!(ch.misc.freq, Some(2));
    assert_eq!(ch.misc.jlpt, Some(4));

    assert_eq!(
        ch.dic_number.get("moro"),
        Some(&DicRef::Moro {
            number: "1".to_string(),
            place: KeyedMap::seeded_with(
                schema::MORO_PLACE_ATTRS,
                [("m_vol", "1".to_string()), ("m_page", "0001".to_string())],
            ),
        })
    );
    assert_eq!(ch.dic_number.get("heisig"), Some(&DicRef::Plain("1".to_string())));

    let rm = &ch.reading_meaning;
    assert_eq!(rm.reading.get("ja_on").map(String::as_str), Some("イツ"));
    assert_eq!(rm.readings_of("ja_on"), ["イチ", "イツ"]);
    assert_eq!(rm.meanings("en"), ["one", "one radical (no.1)"]);
    assert_eq!(rm.meanings("fr"), ["un"]);
    assert_eq!(rm.meanings("es"), ["uno"]);
    assert_eq!(rm.meanings("pt"), ["um"]);
    assert_eq!(rm.nanori, ["かず", "い", "いっ"]);
}

#[test]
fn test_misclassifications_keep_order() {
    let parsed = parse_document(KANJIDIC2, &ParserConfig::default()).unwrap();
    let qc = &parsed.characters[1].query_code;

    assert_eq!(qc.codes.get("skip").map(String::as_str), Some("4-2-1"));
    assert_eq!(
        qc.misclass,
        vec![
            Misclassification::Posn("1-1-1".to_string()),
            Misclassification::StrokeCount("4-1-1".to_string()),
        ]
    );
}

#[test]
fn test_repeated_and_unlisted_data_is_kept() {
    let parsed = parse_document(KANJIDIC2, &ParserConfig::default()).unwrap();
    let ch = &parsed.characters[2];

    assert_eq!(ch.misc.variant["jis208"], "1-48-20");
    assert_eq!(ch.misc.variants_of("jis208"), ["1-48-19", "1-48-20"]);

    let Some(DicRef::Moro { number, place }) = ch.dic_number.get("moro") else {
        panic!("expected a moro reference");
    };
    assert_eq!(number, "272P");
    for key in schema::MORO_PLACE_ATTRS {
        assert!(place.contains_key(key));
        assert_eq!(place.get(key), None);
    }

    assert_eq!(
        ch.query_code.misclass,
        vec![Misclassification::Other {
            kind: "new_kind".to_string(),
            code: "1-4-3".to_string(),
        }]
    );
}

#[test]
fn test_parsing_is_idempotent() {
    let config = ParserConfig::default();

    let first = parse_document(KANJIDIC2, &config).unwrap();
    let second = parse_document(KANJIDIC2, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_lazy_and_eager_parse_agree() {
    let parsed = parse_document(KANJIDIC2, &ParserConfig::default()).unwrap();
    let document = Document::parse(KANJIDIC2).unwrap();

    let lazy: Vec<_> = document.characters().collect::<Result<_, _>>().unwrap();
    assert_eq!(lazy, parsed.characters);
    assert_eq!(document.version(), parsed.version);
}

#[test]
fn test_bad_stroke_count_does_not_corrupt_neighbours() {
    let broken = KANJIDIC2.replace(
        "<stroke_count>2</stroke_count>",
        "<stroke_count>abc</stroke_count>",
    );

    let result = parse_document(&broken, &ParserConfig::default());
    assert_matches!(
        result,
        Err(KanjidicError::Entry(EntryError::Format { ref literal, ref field, .. }))
            if literal == "丂" && field == "stroke_count"
    );

    let clean = parse_document(KANJIDIC2, &ParserConfig::default()).unwrap();
    let skipped = parse_document(&broken, &ParserConfig::skipping()).unwrap();
    assert_eq!(skipped.characters.len(), 2);
    assert_eq!(skipped.characters[0], clean.characters[0]);
    assert_eq!(skipped.characters[1], clean.characters[2]);
    assert_eq!(skipped.rejected.len(), 1);
}

#[test]
fn test_malformed_xml_is_fatal() {
    let truncated = KANJIDIC2
        .split("<!-- Entry for Kanji: 丂 -->")
        .next()
        .unwrap();

    let result = parse_document(truncated, &ParserConfig::skipping());

    assert_matches!(result, Err(KanjidicError::Document(_)));
}

#[test]
fn test_json_shape() {
    let parsed = parse_document(KANJIDIC2, &ParserConfig::default()).unwrap();
    let json = serde_json::to_value(&parsed.characters[1]).unwrap();

    assert_eq!(json["literal"], "丂");
    assert_eq!(json["codepoint"]["jis208"], serde_json::Value::Null);
    assert_eq!(
        json["dic_number"]["moro"],
        serde_json::json!({"number": "14", "place": {"m_page": "0018", "m_vol": "1"}})
    );
    assert_eq!(
        json["query_code"]["misclass"],
        serde_json::json!([{"posn": "1-1-1"}, {"stroke_count": "4-1-1"}])
    );
}

#[test]
fn test_loader_reads_file() {
    let path = std::env::temp_dir().join(format!("kanjidic2-{}.xml", std::process::id()));
    std::fs::write(&path, KANJIDIC2).unwrap();

    let dict = KanjidicLoader::load_dictionary(&path, &ParserConfig::default());
    std::fs::remove_file(&path).unwrap();

    let dict = dict.unwrap();
    assert_eq!(dict.entry_count(), 3);
    assert_eq!(dict.version().file_version.as_deref(), Some("4"));
}
