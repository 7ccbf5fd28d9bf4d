pub mod error;
pub mod format;
pub mod mock;
pub mod transport;

pub use error::TransportError;
pub use format::{MAX_WORD_LEN, is_valid_word_format, normalize};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
