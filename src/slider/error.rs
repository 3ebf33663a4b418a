// src/slider/error.rs
use crate::math::MathError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliderError {
    #[error("Invalid slider configuration: {field}: {message}")]
    InvalidConfiguration { field: &'static str, message: String },

    #[error("Failed to parse slider configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize slider configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Math(#[from] MathError),
}

pub type SliderResult<T> = Result<T, SliderError>;
