use std::{collections::BTreeSet, fs, io};

use log::{debug, info};
use regex::Regex;
use thiserror::Error;

use crate::utilities::{config::ExtractionMode, constants::MIN_QUEST_NAME_LENGTH};

const NAME_MARKER: &str = "name:";

lazy_static::lazy_static! {
    // Non-greedy and either quote closes the value, so "Cook's Assistant"
    // comes out as "Cook". ExtractionMode::Tokenizer reads such names whole.
    static ref NAME_PATTERN: Regex =
        Regex::new(r#"name:\s*['"](.*?)['"],?"#).expect("quest name pattern should compile");
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Could not read quest file {path}: {source}")]
    InputUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Pulls quest names out of an object-literal style quest database, one
/// `name: '...'` entry per line. Lines without a match are skipped.
#[derive(Debug)]
pub struct QuestExtractor {
    mode: ExtractionMode,
}

impl QuestExtractor {
    pub fn new(mode: ExtractionMode) -> Self {
        QuestExtractor { mode }
    }

    pub fn extract_from_file(&self, path: &str) -> Result<BTreeSet<String>, ExtractionError> {
        let content =
            fs::read_to_string(path).map_err(|source| ExtractionError::InputUnreadable {
                path: path.to_string(),
                source,
            })?;

        let quests = self.extract_from_str(&content);
        info!(
            "Extracted {} unique quest names from {} using {} mode",
            quests.len(),
            path,
            self.mode
        );
        Ok(quests)
    }

    pub fn extract_from_str(&self, content: &str) -> BTreeSet<String> {
        content
            .lines()
            .filter_map(|line| self.extract_from_line(line))
            .collect()
    }

    pub fn extract_from_line(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if !line.contains(NAME_MARKER) || !(line.contains('"') || line.contains('\'')) {
            return None;
        }

        let value = match self.mode {
            ExtractionMode::Pattern => NAME_PATTERN.captures(line)?.get(1)?.as_str().to_string(),
            ExtractionMode::Tokenizer => Self::read_quoted_value(line)?,
        };

        let name = value.trim();
        if name.chars().count() < MIN_QUEST_NAME_LENGTH {
            debug!("Skipping too short name {:?} in line: {}", name, line);
            return None;
        }
        Some(name.to_string())
    }

    /// Reads the string literal after the first `name:` that is followed by
    /// a quote. A backslash keeps the next character as is.
    fn read_quoted_value(line: &str) -> Option<String> {
        for (index, _) in line.match_indices(NAME_MARKER) {
            let rest = line[index + NAME_MARKER.len()..].trim_start();
            let mut chars = rest.chars();
            let quote = match chars.next() {
                Some(c @ ('\'' | '"')) => c,
                _ => continue,
            };

            let mut value = String::new();
            let mut escaped = false;
            for c in chars {
                if escaped {
                    value.push(c);
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == quote {
                    return Some(value);
                } else {
                    value.push(c);
                }
            }
        }
        None
    }
}
