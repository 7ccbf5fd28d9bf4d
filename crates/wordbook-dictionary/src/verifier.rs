use std::sync::Arc;

use reqwest::Url;
use serde_json::Value;
use wordbook_config::dictionary::DictionaryConfig;
use wordbook_core::{HttpRequest, HttpTransport, TransportError};

/// Confirms a word exists by looking it up in an online dictionary.
#[derive(Clone)]
pub struct OnlineWordVerifier {
    config: DictionaryConfig,
    transport: Arc<dyn HttpTransport>,
}

impl OnlineWordVerifier {
    pub fn new(config: DictionaryConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// `Ok(true)` if the dictionary has at least one entry for `word`.
    ///
    /// Unknown words and unexpected responses resolve to `Ok(false)`; only a
    /// failed request is an error.
    pub async fn verify(&self, word: &str) -> Result<bool, TransportError> {
        let url = self.lookup_url(word)?;
        let response = self.transport.send(HttpRequest::get(url)).await?;

        let found = response.status == 200
            && matches!(&response.body, Value::Array(entries) if !entries.is_empty());

        tracing::debug!("dictionary lookup {:?}: HTTP {}, found={}", word, response.status, found);

        Ok(found)
    }

    fn lookup_url(&self, word: &str) -> Result<String, TransportError> {
        let invalid = || TransportError::InvalidUrl(self.config.lookup_url.clone());

        let mut url = Url::parse(&self.config.lookup_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(word);

        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wordbook_core::HttpResponse;
    use wordbook_core::mock::MockTransport;

    use super::*;

    fn verifier(transport: &MockTransport) -> OnlineWordVerifier {
        OnlineWordVerifier::new(DictionaryConfig::default(), Arc::new(transport.clone()))
    }

    #[tokio::test]
    async fn known_word_is_verified() {
        let transport = MockTransport::responding(200, json!([{ "word": "hello" }]));

        assert!(verifier(&transport).verify("hello").await.unwrap());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://api.dictionaryapi.dev/api/v2/entries/en/hello"
        );
    }

    #[tokio::test]
    async fn unknown_word_is_not_an_error() {
        let transport = MockTransport::responding(
            404,
            json!({ "title": "No Definitions Found" }),
        );

        assert!(!verifier(&transport).verify("xyzzyqq").await.unwrap());
    }

    #[tokio::test]
    async fn empty_or_malformed_body_is_rejected() {
        let transport = MockTransport::responding(200, json!([]));
        assert!(!verifier(&transport).verify("hello").await.unwrap());

        let transport = MockTransport::responding(200, json!({ "word": "hello" }));
        assert!(!verifier(&transport).verify("hello").await.unwrap());

        let transport = MockTransport::new(|_| Ok(HttpResponse::status_only(200)));
        assert!(!verifier(&transport).verify("hello").await.unwrap());
    }

    #[tokio::test]
    async fn word_is_escaped_into_a_single_segment() {
        let transport = MockTransport::responding(200, json!([]));

        verifier(&transport).verify("a b/c?").await.unwrap();

        let url = &transport.requests()[0].url;
        assert!(url.ends_with("/entries/en/a%20b%2Fc%3F"), "got {url}");
    }

    #[tokio::test]
    async fn base_url_without_trailing_slash() {
        let transport = MockTransport::responding(200, json!([{}]));
        let config = DictionaryConfig {
            lookup_url: "http://localhost:9000/entries/en".to_string(),
        };
        let verifier = OnlineWordVerifier::new(config, Arc::new(transport.clone()));

        assert!(verifier.verify("well-known").await.unwrap());
        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:9000/entries/en/well-known"
        );
    }

    #[tokio::test]
    async fn transport_failure_is_propagated() {
        let transport = MockTransport::unreachable();

        let result = verifier(&transport).verify("hello").await;

        assert!(matches!(result, Err(TransportError::Unavailable(_))));
    }
}
