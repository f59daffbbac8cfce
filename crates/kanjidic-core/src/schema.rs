//! Key tables of the KANJIDIC2 schema.
//!
//! Every keyed map in a [`Character`](crate::types::Character) is seeded from
//! one of these tables, so a lookup by a documented key always succeeds even
//! when the source entry omits the element.

/// `cp_value/@cp_type`
pub const CODEPOINT_TYPES: &[&str] = &["jis208", "jis212", "jis213", "ucs"];

/// `rad_value/@rad_type`
pub const RADICAL_TYPES: &[&str] = &["classical", "nelson_c"];

/// `dic_ref/@dr_type`
pub const DIC_REF_TYPES: &[&str] = &[
    "nelson_c",
    "nelson_n",
    "halpern_njecd",
    "halpern_kkd",
    "halpern_kkld",
    "halpern_kkld_2ed",
    "heisig",
    "heisig6",
    "gakken",
    "oneill_names",
    "oneill_kk",
    "moro",
    "henshall",
    "sh_kk",
    "sh_kk2",
    "sakade",
    "jf_cards",
    "henshall3",
    "tutt_cards",
    "crowley",
    "kanji_in_context",
    "busy_people",
    "kodansha_compact",
    "maniette",
];

/// The one `dr_type` whose value carries volume/page attributes.
pub const MORO: &str = "moro";

/// Attributes of a `moro` reference other than `dr_type`
pub const MORO_PLACE_ATTRS: &[&str] = &["m_vol", "m_page"];

/// `q_code/@qc_type`
pub const QUERY_CODE_TYPES: &[&str] = &["skip", "sh_desc", "four_corner", "deroo"];

/// `reading/@r_type`
pub const READING_TYPES: &[&str] = &["pinyin", "korean_r", "korean_h", "ja_on", "ja_kun"];

/// `meaning/@m_lang`
pub const MEANING_LANGS: &[&str] = &["en", "fr", "es", "pt"];

/// Language of a `meaning` without `m_lang`.
pub const DEFAULT_MEANING_LANG: &str = "en";
