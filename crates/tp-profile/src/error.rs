use thiserror::Error;
use tp_core::ConfigError;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile parse error: {0}")]
    Parse(String),

    #[error("profile {name:?}: {source}")]
    Config {
        name:   String,
        #[source]
        source: ConfigError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
