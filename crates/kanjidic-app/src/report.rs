use std::fmt::Display;
use std::io::{self, Write};

use kanjidic_config::output::{OutputConfig, OutputFormat};
use kanjidic_core::{Character, DicRef, KeyedMap, Version};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'a Version,
    characters: &'a [&'a Character],
}

/// Write the version block followed by every character
pub fn write_report<W: Write>(
    out: &mut W,
    output: &OutputConfig,
    version: &Version,
    characters: &[&Character],
) -> anyhow::Result<()> {
    match output.format {
        OutputFormat::Text => {
            write_version(out, version)?;
            writeln!(out)?;
            for character in characters {
                write_character(out, character)?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                version,
                characters,
            };
            if output.pretty {
                serde_json::to_writer_pretty(&mut *out, &report)?;
            } else {
                serde_json::to_writer(&mut *out, &report)?;
            }
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn write_version<W: Write>(out: &mut W, version: &Version) -> io::Result<()> {
    writeln!(out, "File version: {}", or_none(&version.file_version))?;
    writeln!(out, "Database version: {}", or_none(&version.database_version))?;
    writeln!(out, "Date of creation: {}", or_none(&version.date_of_creation))
}

pub fn write_character<W: Write>(out: &mut W, ch: &Character) -> io::Result<()> {
    writeln!(out, "---------- {} ----------", ch.literal)?;
    writeln!(out, "Codepoint: {}", keyed(&ch.codepoint, |v| v.clone()))?;
    writeln!(out, "Radical: {}", keyed(&ch.radical, |v| v.to_string()))?;

    let misc = &ch.misc;
    let variant = braces(misc.variant.iter().map(|(k, v)| format!("{k}: {v}")));
    write!(
        out,
        "Misc: {{grade: {}, stroke_count: {}, variant: {variant}, freq: {}, rad_name: {}, jlpt: {}",
        or_none(&misc.grade),
        or_none(&misc.stroke_count),
        or_none(&misc.freq),
        or_none(&misc.rad_name),
        or_none(&misc.jlpt),
    )?;
    if misc.all_variants.values().any(|codes| codes.len() > 1) {
        let all = braces(
            misc.all_variants
                .iter()
                .map(|(k, codes)| format!("{k}: [{}]", codes.join(", "))),
        );
        write!(out, ", all_variants: {all}")?;
    }
    if !misc.stroke_miscounts.is_empty() {
        let miscounts: Vec<_> = misc.stroke_miscounts.iter().map(u32::to_string).collect();
        write!(out, ", stroke_miscounts: [{}]", miscounts.join(", "))?;
    }
    writeln!(out, "}}")?;

    writeln!(out, "Dic number: {}", keyed(&ch.dic_number, dic_ref))?;

    let qc = &ch.query_code;
    let misclass = qc
        .misclass
        .iter()
        .map(|m| format!("{{{}: {}}}", m.kind(), m.code()))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        out,
        "Query code: {}, misclass: [{misclass}]",
        keyed(&qc.codes, |v| v.clone())
    )?;

    let rm = &ch.reading_meaning;
    let meaning = braces(
        rm.meaning
            .iter()
            .map(|(lang, list)| format!("{lang}: [{}]", list.join(", "))),
    );
    writeln!(
        out,
        "Reading Meaning: {{reading: {}, meaning: {meaning}, nanori: [{}]}}",
        keyed(&rm.reading, |v| v.clone()),
        rm.nanori.join(", ")
    )?;
    writeln!(out)
}

fn or_none<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

fn keyed<V>(map: &KeyedMap<V>, render: impl Fn(&V) -> String) -> String {
    braces(map.iter().map(|(key, value)| match value {
        Some(v) => format!("{key}: {}", render(v)),
        None => format!("{key}: None"),
    }))
}

fn dic_ref(value: &DicRef) -> String {
    match value {
        DicRef::Plain(number) => number.clone(),
        DicRef::Moro { number, place } => {
            format!("{{number: {number}, place: {}}}", keyed(place, |v| v.clone()))
        }
    }
}

fn braces(items: impl Iterator<Item = String>) -> String {
    format!("{{{}}}", items.collect::<Vec<_>>().join(", "))
}
