use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum LiftError {
    #[error("output error: {0}")]
    Output(String),
    #[error("persistence error: {0}")]
    Persist(String),
    #[error("console error: {0}")]
    Console(String),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

// Collaborator errors arrive as boxed trait objects; wrap them into the
// typed variants so callers can match on the failing seam.
pub(crate) fn output_err(e: BoxedError) -> Report {
    Report::new(LiftError::Output(e.to_string()))
}

pub(crate) fn persist_err(e: BoxedError) -> Report {
    Report::new(LiftError::Persist(e.to_string()))
}

pub(crate) fn console_err(e: BoxedError) -> Report {
    Report::new(LiftError::Console(e.to_string()))
}
