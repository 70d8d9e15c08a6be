use crate::units::types::Unit;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unsupported unit: '{0}'")]
    UnsupportedUnit(String),

    #[error("Missing context: converting {unit} requires {requirement}")]
    MissingContext {
        unit: Unit,
        requirement: &'static str,
    },

    #[error("Invalid numeric literal: '{0}'")]
    InvalidNumericLiteral(String),

    #[error("Invalid context: {field} must be a positive finite number, got {value}")]
    InvalidContext { field: &'static str, value: f64 },

    #[error("Invalid value: {0} is not a finite number")]
    InvalidValue(f64),
}
