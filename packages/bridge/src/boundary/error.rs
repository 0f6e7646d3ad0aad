use thiserror::Error;

use crate::engine::EngineError;

/// Errors reported back across the boundary.
///
/// All of them are raised before the wrapped value is touched, so a failed
/// call leaves receiver and arguments unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BridgeError {
    #[error("{target} has no operation '{name}'")]
    UnknownOperation { target: &'static str, name: String },

    #[error("{target} has no property '{name}'")]
    UnknownProperty { target: &'static str, name: String },

    #[error("{context}: argument {index} must be {expected}, got {found}")]
    TypeMismatch {
        context: String,
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error("{context}: unsupported argument {index}, expected {expected} host object, got {found}")]
    UnsupportedType {
        context: String,
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error("{target} host object refers to a destroyed value")]
    Expired { target: &'static str },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
