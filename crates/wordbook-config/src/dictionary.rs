use std::env;

use serde::{Deserialize, Serialize};

fn default_lookup_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en/".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL; the word is appended as the last path segment
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let lookup_url = env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_lookup_url());

        Self { lookup_url }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            lookup_url: default_lookup_url(),
        }
    }
}
