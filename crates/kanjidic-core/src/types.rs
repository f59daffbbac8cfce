use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::schema;

/// File and database version from the dictionary header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub file_version: Option<String>,
    pub database_version: Option<String>,
    pub date_of_creation: Option<String>,
}

/// One dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub literal: String,
    pub codepoint: Codepoint,
    pub radical: Radical,
    pub misc: Misc,
    pub dic_number: DicNumber,
    pub query_code: QueryCode,
    pub reading_meaning: ReadingMeaning,
}

impl Character {
    /// Entry with every keyed map seeded and nothing decoded yet
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            codepoint: Codepoint::default(),
            radical: Radical::default(),
            misc: Misc::default(),
            dic_number: DicNumber::default(),
            query_code: QueryCode::default(),
            reading_meaning: ReadingMeaning::default(),
        }
    }
}

/// Map whose documented keys are always present.
///
/// A key maps to `None` until the source supplies a value for it. Keys outside
/// the seed table are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyedMap<V> {
    entries: BTreeMap<String, Option<V>>,
}

impl<V> KeyedMap<V> {
    pub fn seeded(keys: &[&str]) -> Self {
        Self {
            entries: keys.iter().map(|k| (k.to_string(), None)).collect(),
        }
    }

    /// Seeded map with `values` set on top, unknown keys included
    pub fn seeded_with<K: Into<String>>(
        keys: &[&str],
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        let mut map = Self::seeded(keys);
        for (key, value) in values {
            map.set(key, Some(value));
        }
        map
    }

    /// Value stored under `key`, `None` when unset or unknown
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Overwrites whatever `key` held before
    pub fn set(&mut self, key: impl Into<String>, value: Option<V>) {
        self.entries.insert(key.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&V>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

}

/// cp_type -> code in that encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Codepoint(KeyedMap<String>);

impl Default for Codepoint {
    fn default() -> Self {
        Self(KeyedMap::seeded(schema::CODEPOINT_TYPES))
    }
}

impl Deref for Codepoint {
    type Target = KeyedMap<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Codepoint {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// rad_type -> radical number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radical(KeyedMap<u32>);

impl Default for Radical {
    fn default() -> Self {
        Self(KeyedMap::seeded(schema::RADICAL_TYPES))
    }
}

impl Deref for Radical {
    type Target = KeyedMap<u32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Radical {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misc {
    pub grade: Option<u32>,
    /// Accepted stroke count.
    ///
    /// This is the first `stroke_count` in the entry, not the last: KANJIDIC2
    /// lists the accepted count first and common miscounts after it.
    pub stroke_count: Option<u32>,
    /// Common miscounts listed after the accepted count
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stroke_miscounts: Vec<u32>,
    /// var_type -> variant code; a repeated var_type keeps the last value
    pub variant: BTreeMap<String, String>,
    /// var_type -> every variant code of that type in document order
    #[serde(default)]
    pub all_variants: BTreeMap<String, Vec<String>>,
    pub freq: Option<u32>,
    pub rad_name: Option<String>,
    pub jlpt: Option<u32>,
}

impl Misc {
    pub fn variants_of(&self, var_type: &str) -> &[String] {
        self.all_variants
            .get(var_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Index of a character in one printed dictionary.
///
/// Only Morohashi's Daikanwajiten carries volume and page attributes, so its
/// references are a separate variant rather than optional fields on every
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DicRef {
    Plain(String),
    Moro {
        number: String,
        /// Volume and page, seeded with `m_vol` and `m_page`. Any other
        /// attribute of the element lands here too.
        place: KeyedMap<String>,
    },
}

impl DicRef {
    /// Index text regardless of variant
    pub fn number(&self) -> &str {
        match self {
            DicRef::Plain(number) => number,
            DicRef::Moro { number, .. } => number,
        }
    }
}

/// dr_type -> reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DicNumber(KeyedMap<DicRef>);

impl Default for DicNumber {
    fn default() -> Self {
        Self(KeyedMap::seeded(schema::DIC_REF_TYPES))
    }
}

impl Deref for DicNumber {
    type Target = KeyedMap<DicRef>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DicNumber {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCode {
    /// qc_type -> code
    pub codes: KeyedMap<String>,
    /// SKIP misclassifications in document order
    pub misclass: Vec<Misclassification>,
}

impl Default for QueryCode {
    fn default() -> Self {
        Self {
            codes: KeyedMap::seeded(schema::QUERY_CODE_TYPES),
            misclass: Vec::new(),
        }
    }
}

/// A SKIP code that readers commonly, but wrongly, arrive at.
///
/// Serializes as a single-key object, e.g. `{"posn": "1-4-3"}`. Kinds outside
/// the KANJIDIC2 schema are kept as [`Misclassification::Other`] and serialize
/// the same way under their own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Misclassification {
    Posn(String),
    StrokeCount(String),
    StrokeAndPosn(String),
    StrokeDiff(String),
    Other { kind: String, code: String },
}

impl Misclassification {
    /// Build from a `skip_misclass` attribute value
    pub fn from_kind(kind: &str, code: impl Into<String>) -> Self {
        let code = code.into();
        match kind {
            "posn" => Self::Posn(code),
            "stroke_count" => Self::StrokeCount(code),
            "stroke_and_posn" => Self::StrokeAndPosn(code),
            "stroke_diff" => Self::StrokeDiff(code),
            other => Self::Other {
                kind: other.to_string(),
                code,
            },
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Posn(_) => "posn",
            Self::StrokeCount(_) => "stroke_count",
            Self::StrokeAndPosn(_) => "stroke_and_posn",
            Self::StrokeDiff(_) => "stroke_diff",
            Self::Other { kind, .. } => kind,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Posn(code)
            | Self::StrokeCount(code)
            | Self::StrokeAndPosn(code)
            | Self::StrokeDiff(code)
            | Self::Other { code, .. } => code,
        }
    }
}

impl Serialize for Misclassification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.kind(), self.code())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Misclassification {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map: BTreeMap<String, String> = Deserialize::deserialize(deserializer)?;
        let mut entries = map.into_iter();
        match (entries.next(), entries.next()) {
            (Some((kind, code)), None) => Ok(Self::from_kind(&kind, code)),
            _ => Err(de::Error::custom(
                "misclassification must be a single-key object",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingMeaning {
    /// r_type -> reading; a repeated r_type keeps the last value
    pub reading: KeyedMap<String>,
    /// r_type -> every reading of that type in document order
    pub all_readings: BTreeMap<String, Vec<String>>,
    /// m_lang -> meanings in document order
    pub meaning: BTreeMap<String, Vec<String>>,
    pub nanori: Vec<String>,
}

impl Default for ReadingMeaning {
    fn default() -> Self {
        Self {
            reading: KeyedMap::seeded(schema::READING_TYPES),
            all_readings: BTreeMap::new(),
            meaning: schema::MEANING_LANGS
                .iter()
                .map(|lang| (lang.to_string(), Vec::new()))
                .collect(),
            nanori: Vec::new(),
        }
    }
}

impl ReadingMeaning {
    pub fn meanings(&self, lang: &str) -> &[String] {
        self.meaning.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn readings_of(&self, r_type: &str) -> &[String] {
        self.all_readings
            .get(r_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
