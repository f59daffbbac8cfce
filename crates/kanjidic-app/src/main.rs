//! `kanjidic` -- dump KANJIDIC2 records.
//!
//! # Environment variables
//!
//! | Variable                | Default                  | Description                          |
//! |-------------------------|--------------------------|--------------------------------------|
//! | `KANJIDIC_PATH`         | `src_data/kanjidic2.xml` | Input file when no path is given     |
//! | `KANJIDIC_FORMAT`       | `text`                   | `text` or `json`                     |
//! | `KANJIDIC_SKIP_INVALID` | `false`                  | Skip entries that fail to decode     |
//! | `RUST_LOG`              | `kanjidic=info`          | Log filter, logs go to stderr        |

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kanjidic_config::Config;
use kanjidic_config::output::OutputFormat;
use kanjidic_config::parser::InvalidEntryPolicy;
use kanjidic_core::dictionary::Dictionary;
use kanjidic_parser::{Kanjidic, KanjidicLoader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod report;

#[derive(Debug, Parser)]
#[command(name = "kanjidic")]
#[command(author, version, about = "Parse a KANJIDIC2 file and print its records", long_about = None)]
struct Cli {
    /// KANJIDIC2 XML file
    path: Option<PathBuf>,

    /// JSON config file, overridden by environment and flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Skip entries that fail to decode instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Only print these characters
    #[arg(long = "literal", value_name = "KANJI")]
    literals: Vec<String>,
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                let mut config = Config::from_json(&json)
                    .with_context(|| format!("Invalid config {}", path.display()))?;
                config.apply_env();
                config
            }
            None => Config::new(),
        };

        if let Some(path) = &self.path {
            config.input_path = path.display().to_string();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.skip_invalid {
            config.parser.on_invalid_entry = InvalidEntryPolicy::Skip;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kanjidic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;

    let path = PathBuf::from(&config.input_path);
    let parsed = KanjidicLoader::load_from_file(&path, &config.parser)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if !parsed.rejected.is_empty() {
        tracing::warn!(count = parsed.rejected.len(), "Some entries were skipped");
    }

    let dict = Kanjidic::from(parsed);
    let characters: Vec<_> = if cli.literals.is_empty() {
        dict.entries().collect()
    } else {
        cli.literals
            .iter()
            .filter_map(|literal| {
                let found = dict.lookup(literal);
                if found.is_none() {
                    tracing::warn!(literal = %literal, "Not in dictionary");
                }
                found
            })
            .collect()
    };

    let mut out = BufWriter::new(io::stdout().lock());
    report::write_report(&mut out, &config.output, dict.version(), &characters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "kanjidic",
            "data/kanjidic2.xml",
            "--format",
            "json",
            "--skip-invalid",
            "--literal",
            "亜",
            "--literal",
            "一",
        ]);

        let config = cli.config().unwrap();

        assert_eq!(config.input_path, "data/kanjidic2.xml");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.parser.on_invalid_entry, InvalidEntryPolicy::Skip);
        assert_eq!(cli.literals, ["亜", "一"]);
    }
}
