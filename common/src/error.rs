use thiserror::Error;

/// Errors surfaced by the domain models, ports and services.
///
/// None of them are recoverable: any error aborts the current operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolidError {
    /// A collaborator has no real body behind the operation.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// The input names a variant outside the known closed set.
    #[error("unsupported variant: '{0}'")]
    UnsupportedVariant(String),

    /// The input could not be parsed into a model.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SolidError>;
