use std::env;

use serde::{Deserialize, Serialize};

use self::output::{OutputConfig, OutputFormat};
use self::parser::{InvalidEntryPolicy, ParserConfig};

pub mod output;
pub mod parser;

fn default_input_path() -> String {
    "src_data/kanjidic2.xml".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub output: OutputConfig,

    /// KANJIDIC2 file read when no path is given on the command line
    #[serde(default = "default_input_path")]
    pub input_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            output: OutputConfig::default(),
            input_path: default_input_path(),
        }
    }
}

impl Config {
    /// Defaults overridden by `KANJIDIC_*` environment variables
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var("KANJIDIC_PATH") {
            self.input_path = path;
        }

        if let Some(format) = env::var("KANJIDIC_FORMAT")
            .ok()
            .and_then(|v| OutputFormat::from_str(&v))
        {
            self.output.format = format;
        }

        let skip_invalid = env::var("KANJIDIC_SKIP_INVALID")
            .ok()
            .and_then(|v| v.parse::<bool>().ok());
        match skip_invalid {
            Some(true) => self.parser.on_invalid_entry = InvalidEntryPolicy::Skip,
            Some(false) => self.parser.on_invalid_entry = InvalidEntryPolicy::Fail,
            None => {}
        }
    }
}
