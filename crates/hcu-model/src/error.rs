use thiserror::Error;

use crate::parameter::ParameterSide;
use crate::results::ResultCategory;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("parameter slot {number} is out of range (expected 1..={max})")]
    InvalidSlotNumber { number: usize, max: usize },

    #[error("{side} parameter name list must contain {expected} names, got {actual}")]
    NameListLength {
        side: ParameterSide,
        expected: usize,
        actual: usize,
    },

    #[error("{side} parameters must hold {expected} slots, got {actual}")]
    SlotCount {
        side: ParameterSide,
        expected: usize,
        actual: usize,
    },

    #[error("unknown {category} result channel: {option}")]
    UnknownResultChannel {
        category: ResultCategory,
        option: String,
    },

    #[error("unknown unit category: {label}")]
    UnknownCategory { label: String },

    #[error("invalid value for {field}: {value}")]
    InvalidOption { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
