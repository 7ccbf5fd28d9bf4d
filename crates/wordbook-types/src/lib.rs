pub mod host;
pub mod types;

pub use host::{HostError, TranslateCompletion, TranslateResult, ValidateCompletion};
pub use types::{
    Credentials, ErrorKind, SubmissionOutcome, TranslationEvent, WordbookChoice,
};
