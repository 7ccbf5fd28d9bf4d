use std::env;

use serde::{Deserialize, Serialize};
use wordbook_types::Credentials;

/// Options the user sets in the host's plugin settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginOptions {
    /// Eudic open API token, e.g. "NIS xxxx"
    pub authorization: Option<String>,
    pub wordbook_id: Option<String>,
    /// Skip multi-word text instead of submitting it
    pub word_only: bool,
}

impl PluginOptions {
    pub fn new() -> Self {
        let authorization = env::var("WORDBOOK_AUTHORIZATION").ok();
        let wordbook_id = env::var("WORDBOOK_ID").ok();
        let word_only = env::var("WORDBOOK_WORD_ONLY")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            authorization,
            wordbook_id,
            word_only,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.authorization.clone(), self.wordbook_id.clone())
    }
}

/// Host settings store toggles as "0"/"1"
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_host_and_human_spellings() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn empty_token_does_not_count_as_credentials() {
        let options = PluginOptions {
            authorization: Some(String::new()),
            wordbook_id: Some("0".to_string()),
            word_only: false,
        };

        let credentials = options.credentials();
        assert!(credentials.authorization.is_none());
        assert_eq!(credentials.wordbook_id.as_deref(), Some("0"));
    }
}
