use thiserror::Error;

/// Unified error type for the Molder library.
#[derive(Error, Debug)]
pub enum Error {
    /// The description's namespace did not resolve and at least one path field
    /// needed it.
    #[error("Namespace '{namespace}' not present in source")]
    NamespaceMissing { namespace: String },

    /// Nested population went deeper than the configured limit.
    #[error("Recursion Error: populate nested deeper than {limit} levels")]
    RecursionLimit { limit: usize },

    /// Error related to building a model description.
    #[error("Description Error: {0}")]
    DescriptionError(String),

    /// Failure reported by a computed field.
    #[error("Computed field '{field}' failed: {message}")]
    ComputedField { field: String, message: String },

    /// Invalid configuration values.
    #[error("Config Error: {0}")]
    ConfigError(String),

    /// JSON (de)serialization failure.
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a computed field failure.
    pub fn computed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ComputedField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for the populate abort caused by an unresolved namespace.
    pub fn is_namespace_missing(&self) -> bool {
        matches!(self, Error::NamespaceMissing { .. })
    }
}

/// A specialized `Result` type for Molder operations.
pub type Result<T> = std::result::Result<T, Error>;
