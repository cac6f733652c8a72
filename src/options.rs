use crate::{
    result::{Result, ScriptError},
    splitter::DEFAULT_DELIMITER,
};
use serde::{Deserialize, Serialize};
use std::fs;

/// Characters that already have a lexical meaning and can't separate statements
const RESERVED_DELIMITERS: [char; 6] = ['\'', '"', '\\', '-', '/', '*'];

/// How a script is split and prepared before each statement is executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptOptions {
    /// Statement separator, only significant outside literals and comments
    pub delimiter: char,
    /// Remove `--` and `/* */` comments from each statement before running it
    pub strip_comments: bool,
    /// Trim surrounding whitespace from each statement before running it
    pub trim: bool,
    /// Send the whole script as one statement instead of splitting it
    pub single_statement: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        ScriptOptions {
            delimiter: DEFAULT_DELIMITER,
            strip_comments: true,
            trim: true,
            single_statement: false,
        }
    }
}

impl ScriptOptions {
    pub fn with_delimiter(delimiter: char) -> Result<Self> {
        let options = ScriptOptions {
            delimiter,
            ..Default::default()
        };
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let json: serde_json::Value = serde_json::from_str(&content)?;
        Ok(Self::from_json(json)?)
    }

    /// Load options from a serde_json::Value object; missing fields take their defaults
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        let options: ScriptOptions = serde_json::from_value(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject delimiters that could never be seen at the top level of a script
    pub fn validate(&self) -> Result<()> {
        let delimiter = self.delimiter;
        if delimiter.is_whitespace() {
            return Err(ScriptError::new_invalid_delimiter(
                delimiter,
                "whitespace can't separate statements",
            ));
        }
        if RESERVED_DELIMITERS.contains(&delimiter) {
            return Err(ScriptError::new_invalid_delimiter(
                delimiter,
                "character is a quote, escape or comment marker",
            ));
        }
        Ok(())
    }
}
