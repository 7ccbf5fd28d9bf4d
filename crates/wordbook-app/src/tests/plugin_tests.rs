use serde_json::json;
use wordbook_types::{ErrorKind, TranslateCompletion, ValidateCompletion};

use super::{Remote, config, state};
use crate::plugin::{self, TranslateQuery};

fn query(text: &str, detect_from: &str) -> TranslateQuery {
    TranslateQuery {
        text: text.to_string(),
        detect_from: detect_from.to_string(),
    }
}

#[tokio::test]
async fn translate_completes_once_with_result() {
    let transport = Remote::default().transport();
    let state = state(config(Some("NIS token"), Some("0")), &transport);

    let mut completions = Vec::new();
    plugin::translate(&state, query("hello", "en"), |c| completions.push(c)).await;

    assert_eq!(completions.len(), 1);
    assert_eq!(
        serde_json::to_value(&completions[0]).unwrap(),
        json!({
            "result": {
                "from": "en",
                "to": "zh-Hans",
                "toParagraphs": ["添加单词成功"],
                "fromParagraphs": ["success add to word book"]
            }
        })
    );
}

#[tokio::test]
async fn translate_uses_configured_word_only_mode() {
    let transport = Remote::default().transport();
    let mut config = config(Some("NIS token"), Some("0"));
    config.options.word_only = true;
    let state = state(config, &transport);

    let mut completion = None;
    plugin::translate(&state, query("hello world", "en"), |c| completion = Some(c)).await;

    match completion {
        Some(TranslateCompletion::Result(result)) => {
            assert_eq!(result.to_paragraphs, vec!["中文、非英语单词无需添加单词本"]);
        }
        other => panic!("unexpected completion {other:?}"),
    }
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn translate_reports_missing_credentials_as_error() {
    let transport = Remote::default().transport();
    let state = state(config(Some(""), Some("0")), &transport);

    let mut completion = None;
    plugin::translate(&state, query("hello", "en"), |c| completion = Some(c)).await;

    match completion {
        Some(TranslateCompletion::Error(error)) => {
            assert_eq!(error.kind, ErrorKind::Param);
            assert_eq!(error.addition.as_deref(), Some("无"));
        }
        other => panic!("unexpected completion {other:?}"),
    }
}

#[tokio::test]
async fn validate_completes_with_result_flag() {
    let transport = Remote::default().transport();
    let state = state(config(Some("NIS token"), Some("0")), &transport);

    let mut completion = None;
    plugin::validate(&state, |c| completion = Some(c)).await;

    assert_eq!(
        completion,
        Some(ValidateCompletion {
            result: true,
            error: None
        })
    );
}

#[test]
fn declares_english_and_simplified_chinese() {
    assert_eq!(plugin::supported_languages(), vec!["zh-Hans", "en"]);
}
