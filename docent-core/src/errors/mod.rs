//! Error taxonomy — one enum per subsystem, unified under [`DocentError`].

mod config_error;
mod corpus_error;
mod llm_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use llm_error::LlmError;

/// Umbrella error for the docent workspace.
#[derive(Debug, thiserror::Error)]
pub enum DocentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Result alias used throughout the workspace.
pub type DocentResult<T> = Result<T, DocentError>;
