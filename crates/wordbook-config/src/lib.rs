use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::eudic::EudicConfig;
use self::options::PluginOptions;

pub mod dictionary;
pub mod eudic;
pub mod options;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub options: PluginOptions,
    pub eudic: EudicConfig,
    pub dictionary: DictionaryConfig,

    /// Per-request timeout applied by the HTTP transport
    pub timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Config {
            options: PluginOptions::new(),
            eudic: EudicConfig::new(),
            dictionary: DictionaryConfig::new(),

            timeout_seconds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: PluginOptions::default(),
            eudic: EudicConfig::default(),
            dictionary: DictionaryConfig::default(),
            timeout_seconds: 30,
        }
    }
}
