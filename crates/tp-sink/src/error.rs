use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("mock location is not enabled; call enable() first")]
    NotEnabled,

    #[error("no location available")]
    NoPosition,

    #[error("location backend failed: {0}")]
    Backend(String),
}

pub type SinkResult<T> = Result<T, SinkError>;
