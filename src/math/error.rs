// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid radius: {radius} (must be finite and >= 0)")]
    InvalidRadius { radius: f32 },

    #[error("Non-finite value for {what}")]
    NonFiniteValue { what: String },
}

pub type MathResult<T> = Result<T, MathError>;
