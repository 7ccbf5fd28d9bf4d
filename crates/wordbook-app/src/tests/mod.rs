use std::sync::Arc;

use serde_json::{Value, json};
use wordbook_config::Config;
use wordbook_core::mock::MockTransport;
use wordbook_core::{HttpRequest, HttpResponse, TransportError};

use crate::state::AppState;

mod plugin_tests;

/// How the fake dictionary and wordbook endpoints answer
#[derive(Clone)]
pub(crate) struct Remote {
    pub dictionary: Reply,
    pub add_word: Reply,
    pub list: Reply,
}

#[derive(Clone)]
pub(crate) enum Reply {
    Status(u16, Value),
    Down,
}

impl Default for Remote {
    fn default() -> Self {
        Self {
            dictionary: Reply::Status(200, json!([{ "word": "hello" }])),
            add_word: Reply::Status(201, Value::Null),
            list: Reply::Status(200, json!({ "data": [] })),
        }
    }
}

impl Remote {
    pub fn transport(self) -> MockTransport {
        MockTransport::new(move |request| {
            let reply = if is_dictionary(request) {
                &self.dictionary
            } else if is_add_word(request) {
                &self.add_word
            } else {
                &self.list
            };

            match reply {
                Reply::Status(status, body) => Ok(HttpResponse::new(*status, body.clone())),
                Reply::Down => Err(TransportError::Unavailable(request.url.clone())),
            }
        })
    }
}

pub(crate) fn is_dictionary(request: &HttpRequest) -> bool {
    request.url.contains("dictionaryapi.dev")
}

pub(crate) fn is_add_word(request: &HttpRequest) -> bool {
    request.url.ends_with("/studylist/words")
}

pub(crate) fn is_list(request: &HttpRequest) -> bool {
    request.url.contains("/studylist/category")
}

pub(crate) fn config(token: Option<&str>, wordbook_id: Option<&str>) -> Config {
    let mut config = Config::default();
    config.options.authorization = token.map(str::to_string);
    config.options.wordbook_id = wordbook_id.map(str::to_string);
    config
}

pub(crate) fn state(config: Config, transport: &MockTransport) -> AppState {
    AppState::with_transport(config, Arc::new(transport.clone()))
}
