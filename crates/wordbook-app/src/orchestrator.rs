use wordbook_core::{is_valid_word_format, normalize};
use wordbook_dictionary::OnlineWordVerifier;
use wordbook_remote::WordbookClient;
use wordbook_types::{Credentials, SubmissionOutcome, TranslationEvent};

const ENGLISH: &str = "en";

const MSG_SKIPPED: &str = "中文、非英语单词无需添加单词本";
const MSG_MISSING_CREDENTIALS: &str = "认证信息或单词本 ID 缺失";
const MSG_VERIFY_FAILED_BAD_FORMAT: &str = "验证单词时出错，且输入不符合单词格式";
const MSG_ADDED: &str = "添加单词成功";
const MSG_ADD_FAILED: &str = "添加单词失败，请检查认证信息是否有效";

/// Decides whether a translated word goes into the wordbook and submits it.
#[derive(Clone)]
pub struct SubmissionOrchestrator {
    verifier: OnlineWordVerifier,
    client: WordbookClient,
}

impl SubmissionOrchestrator {
    pub fn new(verifier: OnlineWordVerifier, client: WordbookClient) -> Self {
        Self { verifier, client }
    }

    /// Run the pipeline for one event. Never fails: every error becomes a
    /// [`SubmissionOutcome::Failed`].
    pub async fn submit(
        &self,
        event: &TranslationEvent,
        credentials: &Credentials,
    ) -> SubmissionOutcome {
        let text = normalize(&event.text);

        // Eligibility
        let needs_save = !event.word_only_mode || !text.contains(' ');
        if event.source_language != ENGLISH || !needs_save {
            tracing::debug!(
                "skipping {:?} (language={}, word_only={})",
                text,
                event.source_language,
                event.word_only_mode
            );
            return SubmissionOutcome::Skipped(MSG_SKIPPED.to_string());
        }

        let Some((token, wordbook_id)) = credentials.complete() else {
            tracing::warn!("token or wordbook id missing");
            return SubmissionOutcome::param_error(MSG_MISSING_CREDENTIALS);
        };

        if !is_valid_word_format(&text) {
            tracing::debug!("rejected {:?}: bad format", text);
            return SubmissionOutcome::param_error(format!("\"{text}\" 格式不符合英文单词规范"));
        }

        match self.verifier.verify(&text).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("rejected {:?}: not in dictionary", text);
                return SubmissionOutcome::param_error(format!("\"{text}\" 不是有效的英文单词"));
            }
            Err(e) => {
                tracing::error!("failed to verify {:?}: {}", text, e);
                // Dictionary is a quality filter; fall back to the format check
                if !is_valid_word_format(&text) {
                    return SubmissionOutcome::param_error(MSG_VERIFY_FAILED_BAD_FORMAT);
                }
            }
        }

        self.add_word(token, &text, wordbook_id).await
    }

    async fn add_word(&self, token: &str, word: &str, wordbook_id: &str) -> SubmissionOutcome {
        match self.client.add_word(token, word, wordbook_id).await {
            Ok(response) if response.is_created() => {
                tracing::info!("added {:?} to wordbook {}", word, wordbook_id);
                SubmissionOutcome::Succeeded(MSG_ADDED.to_string())
            }
            Ok(response) => {
                tracing::warn!("wordbook rejected {:?}: HTTP {}", word, response.status);
                SubmissionOutcome::param_error(MSG_ADD_FAILED)
            }
            Err(e) => {
                tracing::error!("failed to add {:?}: {}", word, e);
                SubmissionOutcome::param_error(MSG_ADD_FAILED)
            }
        }
    }
}
