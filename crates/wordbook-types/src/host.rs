//! Completion payloads exchanged with the host plugin runtime.

use serde::{Deserialize, Serialize};

use crate::types::{ErrorKind, SubmissionOutcome};

pub const SOURCE_LANGUAGE: &str = "en";
pub const TARGET_LANGUAGE: &str = "zh-Hans";
pub const TROUBLESHOOTING_LINK: &str = "https://github.com/yuhaowin/wordbook-bob-plugin";

const SAVED_PARAGRAPH: &str = "success add to word book";
const NO_ADDITION: &str = "无";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub from: String,
    pub to: String,
    pub to_paragraphs: Vec<String>,
    pub from_paragraphs: Vec<String>,
}

impl TranslateResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            from: SOURCE_LANGUAGE.to_string(),
            to: TARGET_LANGUAGE.to_string(),
            to_paragraphs: vec![message.into()],
            from_paragraphs: vec![SAVED_PARAGRAPH.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub troubleshooting_link: Option<String>,
}

impl HostError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            addition: None,
            troubleshooting_link: None,
        }
    }

    pub fn param(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Param, message)
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Credential, message)
    }

    pub fn with_troubleshooting_link(mut self) -> Self {
        self.troubleshooting_link = Some(TROUBLESHOOTING_LINK.to_string());
        self
    }
}

/// `{"result": ...}` or `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslateCompletion {
    Result(TranslateResult),
    Error(HostError),
}

impl TranslateCompletion {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Result(_))
    }
}

impl From<SubmissionOutcome> for TranslateCompletion {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Skipped(message) | SubmissionOutcome::Succeeded(message) => {
                Self::Result(TranslateResult::new(message))
            }
            SubmissionOutcome::Failed(kind, message) => {
                let mut error = HostError::new(kind, message);
                error.addition = Some(NO_ADDITION.to_string());
                if kind == ErrorKind::Credential {
                    error = error.with_troubleshooting_link();
                }
                Self::Error(error)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateCompletion {
    pub result: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<HostError>,
}

impl From<Result<(), HostError>> for ValidateCompletion {
    fn from(result: Result<(), HostError>) -> Self {
        match result {
            Ok(()) => Self {
                result: true,
                error: None,
            },
            Err(error) => Self {
                result: false,
                error: Some(error),
            },
        }
    }
}
