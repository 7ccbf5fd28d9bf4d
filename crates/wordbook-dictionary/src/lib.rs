mod verifier;

pub use verifier::OnlineWordVerifier;
