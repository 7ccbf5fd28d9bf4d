use std::env;

use serde::{Deserialize, Serialize};

fn default_add_word_url() -> String {
    "https://api.frdic.com/api/open/v1/studylist/words".to_string()
}

fn default_book_list_url() -> String {
    "https://api.frdic.com/api/open/v1/studylist/category?language=en".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 11_1_0) AppleWebKit/537.36".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Eudic open API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EudicConfig {
    #[serde(default = "default_add_word_url")]
    pub add_word_url: String,
    #[serde(default = "default_book_list_url")]
    pub book_list_url: String,
    /// The API filters requests without a browser user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl EudicConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            add_word_url: env::var("EUDIC_ADD_WORD_URL").unwrap_or(defaults.add_word_url),
            book_list_url: env::var("EUDIC_BOOK_LIST_URL").unwrap_or(defaults.book_list_url),
            user_agent: env::var("EUDIC_USER_AGENT").unwrap_or(defaults.user_agent),
            language: defaults.language,
        }
    }
}

impl Default for EudicConfig {
    fn default() -> Self {
        Self {
            add_word_url: default_add_word_url(),
            book_list_url: default_book_list_url(),
            user_agent: default_user_agent(),
            language: default_language(),
        }
    }
}
