//! The answer form: one hidden field filled from the controller at submit time.

use crate::tagging::TaggingController;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Compose an answer before submitting")]
    EmptyAnswer,

    #[error("Could not write answer: {0}")]
    Io(#[from] io::Error),

    #[error("Could not encode answer: {0}")]
    Encode(#[from] serde_json::Error),
}

/// How a submission is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The answer string alone
    #[default]
    Plain,
    /// `field=value`, url-encoded
    Form,
    /// `{"field": "value"}`
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "form" => Ok(Self::Form),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerForm {
    field: String,
    allow_empty: bool,
}

impl AnswerForm {
    pub fn new(field: impl Into<String>, allow_empty: bool) -> Self {
        Self {
            field: field.into(),
            allow_empty,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Writes the serialized answer into the output field.
    pub fn submit(&self, controller: &TaggingController) -> Result<Submission, SubmitError> {
        let value = controller.serialize();
        if value.is_empty() && !self.allow_empty {
            return Err(SubmitError::EmptyAnswer);
        }

        info!(field = %self.field, words = controller.sequence().len(), "answer submitted");
        Ok(Submission {
            field: self.field.clone(),
            value,
        })
    }
}

impl Default for AnswerForm {
    fn default() -> Self {
        Self::new("answer", false)
    }
}

/// The filled output field handed to the server side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub field: String,
    pub value: String,
}

impl Submission {
    pub fn encode(&self, format: OutputFormat) -> Result<String, SubmitError> {
        let encoded = match format {
            OutputFormat::Plain => self.value.clone(),
            OutputFormat::Form => url::form_urlencoded::Serializer::new(String::new())
                .append_pair(&self.field, &self.value)
                .finish(),
            OutputFormat::Json => {
                let mut body = serde_json::Map::new();
                body.insert(
                    self.field.clone(),
                    serde_json::Value::String(self.value.clone()),
                );
                serde_json::to_string(&body)?
            }
        };
        Ok(encoded)
    }

    /// Writes the encoded submission to `path`, or stdout when `None`.
    pub fn write_to(&self, format: OutputFormat, path: Option<&Path>) -> Result<(), SubmitError> {
        let encoded = self.encode(format)?;
        match path {
            Some(path) => fs::write(path, format!("{}\n", encoded))?,
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", encoded)?;
            }
        }
        Ok(())
    }
}
