use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream {source_name} unavailable: {reason}")]
    Upstream { source_name: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn upstream(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Error::Upstream {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// True for failures the fallback policy may paper over
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Upstream { .. })
    }
}

/// Reject names that are empty once surrounding whitespace is ignored.
/// The name itself is returned untouched; lookups use it verbatim.
pub fn require_name<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} must not be blank", what)));
    }
    Ok(value)
}
