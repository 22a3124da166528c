use std::{env, fmt, str::FromStr};

use log::error;

use super::constants::DEFAULT_QUESTS_PATH;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ExtractionMode {
    /// `name:\s*['"](.*?)['"],?` as is. Either quote closes the value.
    Pattern,
    /// Closes only on the opening quote and understands backslash escapes.
    Tokenizer,
}

impl FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pattern" => Ok(ExtractionMode::Pattern),
            "tokenizer" => Ok(ExtractionMode::Tokenizer),
            other => Err(format!("Unknown extraction mode: {}", other)),
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExtractionMode::Pattern => write!(f, "pattern"),
            ExtractionMode::Tokenizer => write!(f, "tokenizer"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub quests_path: String,
    pub reference_list_path: String,
    pub extraction_mode: ExtractionMode,
    pub report_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quests_path: DEFAULT_QUESTS_PATH.to_string(),
            reference_list_path: "".to_string(),
            extraction_mode: ExtractionMode::Pattern,
            report_dir: "".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        self.update_from(|key| env::var(key).ok());
    }

    fn update_from<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(quests_path) = var("QUESTS_PATH") {
            if !quests_path.is_empty() {
                self.quests_path = quests_path;
            }
        }
        if let Some(reference_list_path) = var("REFERENCE_LIST_PATH") {
            if std::path::Path::new(&reference_list_path).is_file()
                && reference_list_path.ends_with(".json")
            {
                self.reference_list_path = reference_list_path;
            } else if !reference_list_path.is_empty() {
                error!(
                    "Supplied incorrect path to reference list file: {}",
                    reference_list_path
                );
                self.reference_list_path = "".to_string();
            }
        }
        if let Some(mode) = var("EXTRACTION_MODE") {
            match mode.parse::<ExtractionMode>() {
                Ok(mode) => self.extraction_mode = mode,
                Err(e) => error!("{}, keeping {}", e, self.extraction_mode),
            }
        }
        if let Some(report_dir) = var("REPORT_DIR") {
            self.report_dir = report_dir;
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}
