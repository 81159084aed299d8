//! Command input parsing.
//!
//! Command sequences arrive either as the JSON request body
//! `{"commands": [...]}`, as a bare JSON array, or as plain text. Commands
//! are taken verbatim; two commands are equal only if their text is.

use crate::store::CommandLog;
use cmdcode_core::{CodeError, Result};

/// How command text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// JSON if the text starts with `{` or `[`, whitespace-separated otherwise
    #[default]
    Auto,
    /// `{"commands": [...]}` or `[...]`
    Json,
    /// Commands separated by any whitespace
    Whitespace,
    /// One command per line, blank lines skipped
    Lines,
}

/// Parser for command sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser {
    format: InputFormat,
}

impl CommandParser {
    /// Create a new parser.
    pub fn new(format: InputFormat) -> Self {
        Self { format }
    }

    /// Create a parser that detects JSON input.
    pub fn auto() -> Self {
        Self::new(InputFormat::Auto)
    }

    /// Parse text into a command sequence.
    pub fn parse(&self, text: &str) -> Result<Vec<String>> {
        match self.format {
            InputFormat::Auto => {
                let trimmed = text.trim_start();
                if trimmed.starts_with('{') || trimmed.starts_with('[') {
                    Self::parse_json(trimmed)
                } else {
                    Ok(Self::parse_whitespace(text))
                }
            }
            InputFormat::Json => Self::parse_json(text.trim_start()),
            InputFormat::Whitespace => Ok(Self::parse_whitespace(text)),
            InputFormat::Lines => Ok(Self::parse_lines(text)),
        }
    }

    fn parse_json(text: &str) -> Result<Vec<String>> {
        if text.starts_with('[') {
            return Ok(serde_json::from_str::<Vec<String>>(text)?);
        }
        let log: CommandLog = serde_json::from_str(text)
            .map_err(|e| CodeError::Load(format!("Invalid command log: {}", e)))?;
        Ok(log.commands)
    }

    fn parse_whitespace(text: &str) -> Vec<String> {
        text.split_whitespace().map(|s| s.to_string()).collect()
    }

    fn parse_lines(text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect()
    }
}
