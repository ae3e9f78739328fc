use thiserror::Error;

/// Failures surfaced by a [`Session`](crate::Session).
///
/// Both carry the engine's own error text behind a fixed label. An
/// initialization failure tears the partially built engine down (the next
/// call retries from scratch); an evaluation failure leaves the engine
/// usable for the next call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Failed to initialize yacas: {0}")]
    Initialization(String),
    #[error("Yacas returned this error: {0}")]
    Evaluation(String),
}
