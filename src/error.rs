//! Alert error types

use thiserror::Error;

/// Misuse of an alert that is surfaced to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    /// The alert already ran one of its actions and was torn down
    #[error("alert has already been dismissed")]
    Destroyed,

    /// A supplied button label is empty or whitespace
    #[error("`{field}` must not be blank")]
    BlankLabel { field: &'static str },
}
