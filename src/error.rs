use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown policy: {name}")]
    UnknownPolicy { name: String },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Self::UnknownPolicy { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
