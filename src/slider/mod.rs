// src/slider/mod.rs

pub mod config; // SliderConfig (Balkenhöhen-Einheiten)
pub mod error; // SliderError
pub mod frame; // SliderFrame, DrawCommand
pub mod layout; // SliderLayout, SliderMetrics

pub use self::config::SliderConfig;
pub use self::error::{SliderError, SliderResult};
pub use self::frame::{DrawCommand, SliderFrame};
pub use self::layout::{SliderLayout, SliderMetrics};
