//! Error types for statement binding.

/// Errors that can occur while binding a statement.
///
/// All variants are programmer-input errors raised synchronously; there is
/// nothing to retry or recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// [`bind_query`](crate::bind_query) was called without a substitutions
    /// mapping.
    #[error("a substitutions mapping must be provided")]
    MissingSubstitutions,

    /// [`bind_insert_query`](crate::bind_insert_query) could not locate a
    /// `VALUES (` sequence in the statement.
    #[error("cannot find VALUES keyword in statement")]
    ValuesClauseNotFound,

    /// [`bind_insert_query`](crate::bind_insert_query) located the `VALUES`
    /// clause but no qualifying closing parenthesis after it.
    #[error("cannot find closing parenthesis for VALUES expression")]
    ClosingParenNotFound,
}

/// Result type for binding operations.
pub type Result<T> = std::result::Result<T, BindError>;
