use serde::{Deserialize, Serialize};

/// A single translation request surfaced by the host.
#[derive(Debug, Clone)]
pub struct TranslationEvent {
    pub text: String,
    /// Detected source language tag, e.g. "en"
    pub source_language: String,
    /// Only single words are eligible when set
    pub word_only_mode: bool,
}

impl TranslationEvent {
    pub fn new(text: impl Into<String>, source_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            word_only_mode: false,
        }
    }

    pub fn word_only(mut self, word_only_mode: bool) -> Self {
        self.word_only_mode = word_only_mode;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Value sent verbatim in the `Authorization` header
    pub authorization: Option<String>,
    pub wordbook_id: Option<String>,
}

impl Credentials {
    pub fn new(authorization: Option<String>, wordbook_id: Option<String>) -> Self {
        Self {
            authorization: authorization.filter(|v| !v.trim().is_empty()),
            wordbook_id: wordbook_id.filter(|v| !v.trim().is_empty()),
        }
    }

    /// Token and wordbook id, if both are set
    pub fn complete(&self) -> Option<(&str, &str)> {
        match (&self.authorization, &self.wordbook_id) {
            (Some(token), Some(id)) => Some((token.as_str(), id.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "param")]
    Param,
    #[serde(rename = "secretKey")]
    Credential,
}

/// Terminal result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Skipped(String),
    Succeeded(String),
    Failed(ErrorKind, String),
}

impl SubmissionOutcome {
    pub fn param_error(message: impl Into<String>) -> Self {
        Self::Failed(ErrorKind::Param, message.into())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(..))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Skipped(message) | Self::Succeeded(message) | Self::Failed(_, message) => {
                message
            }
        }
    }
}

/// A remote wordbook as listed by the studylist category endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordbookChoice {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}
