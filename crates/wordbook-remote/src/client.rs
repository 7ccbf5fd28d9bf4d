use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use wordbook_config::eudic::EudicConfig;
use wordbook_core::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use wordbook_types::WordbookChoice;

/// Client for the Eudic studylist API.
#[derive(Clone)]
pub struct WordbookClient {
    config: EudicConfig,
    transport: Arc<dyn HttpTransport>,
}

impl WordbookClient {
    pub fn new(config: EudicConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Add a word to the wordbook `wordbook_id`
    pub async fn add_word(
        &self,
        token: &str,
        word: &str,
        wordbook_id: &str,
    ) -> Result<AddWordResponse, TransportError> {
        let body = AddWordRequest {
            id: wordbook_id,
            language: &self.config.language,
            words: [word],
        };
        let body = serde_json::to_value(&body)
            .map_err(|e| TransportError::Unavailable(format!("Failed to encode request: {e}")))?;

        let request = self.authorized(HttpRequest::post(&self.config.add_word_url, body), token);
        let response = self.transport.send(request).await?;

        tracing::debug!("add word {:?} -> HTTP {}", word, response.status);

        Ok(AddWordResponse {
            status: response.status,
            body: response.body,
        })
    }

    /// List the caller's wordbooks
    pub async fn list_wordbooks(&self, token: &str) -> Result<WordbookListing, TransportError> {
        let request = self.authorized(HttpRequest::get(&self.config.book_list_url), token);
        let HttpResponse { status, mut body } = self.transport.send(request).await?;

        tracing::debug!("list wordbooks -> HTTP {}", status);

        let data = if status == 200 {
            body.get_mut("data").map(Value::take)
        } else {
            None
        };

        Ok(WordbookListing { status, data })
    }

    fn authorized(&self, request: HttpRequest, token: &str) -> HttpRequest {
        request
            .header("Authorization", token)
            .header("Content-Type", "application/json")
            .header("User-Agent", &self.config.user_agent)
    }
}

#[derive(Serialize)]
struct AddWordRequest<'a> {
    id: &'a str,
    language: &'a str,
    words: [&'a str; 1],
}

#[derive(Debug, Clone)]
pub struct AddWordResponse {
    pub status: u16,
    pub body: Value,
}

impl AddWordResponse {
    /// The API answers 201 when the word was accepted
    pub fn is_created(&self) -> bool {
        self.status == 201
    }
}

#[derive(Debug, Clone)]
pub struct WordbookListing {
    pub status: u16,
    /// Raw `data` member of a 200 response
    pub data: Option<Value>,
}

impl WordbookListing {
    pub fn is_authorized(&self) -> bool {
        self.status == 200
    }

    /// Typed view of `data`; empty when the payload is missing or malformed
    pub fn choices(&self) -> Vec<WordbookChoice> {
        self.data
            .as_ref()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
            .unwrap_or_default()
    }
}
