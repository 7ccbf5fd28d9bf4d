pub mod cli;
pub mod config_validator;
pub mod orchestrator;
pub mod plugin;
pub mod state;

pub use config_validator::ConfigValidator;
pub use orchestrator::SubmissionOrchestrator;
pub use state::AppState;

#[cfg(test)]
mod tests;
