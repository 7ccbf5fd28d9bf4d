//! Host-facing entry points. Each takes a completion that is called
//! exactly once with the payload the host expects.

use wordbook_types::host::{SOURCE_LANGUAGE, TARGET_LANGUAGE};
use wordbook_types::{TranslateCompletion, TranslationEvent, ValidateCompletion};

use crate::state::AppState;

/// A translate request as the host delivers it.
#[derive(Debug, Clone)]
pub struct TranslateQuery {
    pub text: String,
    pub detect_from: String,
}

pub fn supported_languages() -> Vec<&'static str> {
    vec![TARGET_LANGUAGE, SOURCE_LANGUAGE]
}

pub async fn translate<F>(state: &AppState, query: TranslateQuery, completion: F)
where
    F: FnOnce(TranslateCompletion),
{
    let event = TranslationEvent::new(query.text, query.detect_from)
        .word_only(state.config.options.word_only);
    let credentials = state.config.options.credentials();

    let outcome = state.orchestrator.submit(&event, &credentials).await;

    completion(outcome.into());
}

pub async fn validate<F>(state: &AppState, completion: F)
where
    F: FnOnce(ValidateCompletion),
{
    let credentials = state.config.options.credentials();
    let result = state.validator.validate(&credentials).await;

    completion(result.into());
}
