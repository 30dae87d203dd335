//! Global error type.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("template name cannot be an empty string")]
    EmptyTemplateName,

    #[error("template \"{name}\" failed to load: {source}")]
    Load {
        name: String,
        source: Box<dyn std::error::Error + Sync + Send>,
    },

    #[error("{0}")]
    Error(#[from] Box<dyn std::error::Error + Sync + Send>),
}

impl Error {
    /// Wrap any error produced by a load function.
    pub fn load(err: impl std::error::Error + Sync + Send + 'static) -> Self {
        Error::Error(Box::new(err))
    }
}
