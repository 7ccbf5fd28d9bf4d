use wordbook_remote::{WordbookClient, WordbookListing};
use wordbook_types::{Credentials, HostError};

/// Word submitted when checking that a configured wordbook id works
const PROBE_WORD: &str = "test";

const MSG_MISSING_TOKEN: &str = "未设置认证信息。";
const MSG_CHOOSE_WORDBOOK: &str = "请选择欧路词典单词本 id : \r\n";
const MSG_TOKEN_REJECTED: &str = "欧路词典 token 错误或过期，请重新填写。";

/// Checks plugin settings once, when the user saves them.
#[derive(Clone)]
pub struct ConfigValidator {
    client: WordbookClient,
}

impl ConfigValidator {
    pub fn new(client: WordbookClient) -> Self {
        Self { client }
    }

    pub async fn validate(&self, credentials: &Credentials) -> Result<(), HostError> {
        let Some(token) = credentials.authorization.as_deref() else {
            return Err(HostError::credential(MSG_MISSING_TOKEN).with_troubleshooting_link());
        };

        let Some(wordbook_id) = credentials.wordbook_id.as_deref() else {
            return Err(self.wordbook_diagnostic(token).await);
        };

        match self.client.add_word(token, PROBE_WORD, wordbook_id).await {
            Ok(response) if response.is_created() => {
                tracing::info!("wordbook {} accepted probe word", wordbook_id);
                Ok(())
            }
            Ok(response) => {
                tracing::warn!("probe word rejected: HTTP {}", response.status);
                Err(self.wordbook_diagnostic(token).await)
            }
            Err(e) => {
                tracing::warn!("probe word failed: {}", e);
                Err(self.wordbook_diagnostic(token).await)
            }
        }
    }

    /// Explain what is wrong by listing the wordbooks the token can see.
    async fn wordbook_diagnostic(&self, token: &str) -> HostError {
        match self.client.list_wordbooks(token).await {
            Ok(listing) if listing.is_authorized() => choose_wordbook(&listing),
            Ok(listing) => {
                tracing::warn!("wordbook listing rejected token: HTTP {}", listing.status);
                HostError::credential(MSG_TOKEN_REJECTED).with_troubleshooting_link()
            }
            Err(e) => {
                tracing::error!("failed to list wordbooks: {}", e);
                HostError::param(format!("无法连接欧路词典: {e}"))
            }
        }
    }
}

fn choose_wordbook(listing: &WordbookListing) -> HostError {
    let data = listing.data.clone().unwrap_or_default();
    let rendered = to_pretty_json(&data);

    HostError::param(format!("{MSG_CHOOSE_WORDBOOK}{rendered}"))
}

/// Four-space indented JSON, the layout the host shows the user
fn to_pretty_json(value: &serde_json::Value) -> String {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}
