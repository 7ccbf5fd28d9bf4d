use std::sync::Arc;
use std::time::Duration;

use wordbook_config::Config;
use wordbook_core::{HttpTransport, ReqwestTransport, TransportError};
use wordbook_dictionary::OnlineWordVerifier;
use wordbook_remote::WordbookClient;

use crate::config_validator::ConfigValidator;
use crate::orchestrator::SubmissionOrchestrator;

pub struct AppState {
    pub config: Config,
    pub orchestrator: SubmissionOrchestrator,
    pub validator: ConfigValidator,
}

impl AppState {
    /// Wire the pipeline to the real network
    pub fn new(config: Config) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_seconds))?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        let client = WordbookClient::new(config.eudic.clone(), Arc::clone(&transport));
        let verifier = OnlineWordVerifier::new(config.dictionary.clone(), transport);

        Self {
            orchestrator: SubmissionOrchestrator::new(verifier, client.clone()),
            validator: ConfigValidator::new(client),
            config,
        }
    }
}
