use thiserror::Error;

use hcu_model::{ModelError, ParameterSide, ResultCategory, SlotId};

/// Errors from configuration state operations.
///
/// Toggling an unsupported special function is deliberately not an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("{side} parameter name list must contain {expected} names, got {actual}")]
    NameListLength {
        side: ParameterSide,
        expected: usize,
        actual: usize,
    },

    #[error("'{option}' is not a {category} result channel")]
    UnknownResultChannel {
        category: ResultCategory,
        option: String,
    },

    #[error("{slot} must be a finite number, got {value}")]
    NonFiniteParameter { slot: SlotId, value: f64 },

    #[error("max force limit must be a finite number, got {value}")]
    NonFiniteLimit { value: f64 },

    #[error(transparent)]
    Model(ModelError),
}

impl From<ModelError> for StateError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::NameListLength {
                side,
                expected,
                actual,
            } => Self::NameListLength {
                side,
                expected,
                actual,
            },
            ModelError::UnknownResultChannel { category, option } => {
                Self::UnknownResultChannel { category, option }
            }
            other => Self::Model(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, StateError>;
