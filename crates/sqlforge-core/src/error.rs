//! Error types for SQL compilation.

/// Errors that can occur while resolving dialects or compiling statements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlError {
    /// A dialect name was requested but never registered.
    #[error("Unknown SQL dialect: '{0}'")]
    UnknownDialect(String),

    /// A dialect name was registered twice.
    #[error("Dialect '{0}' is already registered")]
    DuplicateDialect(String),

    /// A style/dialect was asked to produce a construct it does not implement.
    #[error("Dialect '{dialect}' does not support construct '{construct}'")]
    UnsupportedCapability {
        /// The dialect that was asked.
        dialect: String,
        /// The requested construct name.
        construct: String,
    },

    /// A statement was compiled while missing a required part.
    #[error("Malformed statement: {0}")]
    MalformedStatement(&'static str),
}

/// Result type for compilation operations.
pub type Result<T> = std::result::Result<T, SqlError>;
