// src/slider/config.rs

use super::error::{SliderError, SliderResult};
use crate::math::geometry::metaball::MetaballShape;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Slider-Konfiguration. Größen sind Vielfache der Balkenhöhe, sofern nicht
/// anders angegeben; in Pixel wird erst in `metaball_shape` bzw. im Layout
/// umgerechnet.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    // --- Balken ---
    /// Eckenradius des Balkens in dp (wird mit der Pixeldichte multipliziert).
    pub bar_corner_radius: f32,
    /// Abstand der Balkenoberkante vom Canvas-Rand.
    pub bar_vertical_offset: f32,
    /// Innerer horizontaler Rand in Pixeln.
    pub bar_inner_horizontal_offset: f32,

    // --- Kreise ---
    pub top_circle_diameter: f32,
    pub bottom_circle_diameter: f32,
    pub touch_circle_diameter: f32,
    pub label_circle_diameter: f32,

    // --- Brückenform ---
    pub top_spread_factor: f32,
    pub bottom_start_spread_factor: f32,
    pub bottom_end_spread_factor: f32,
    pub handle_rate: f32,
    pub max_distance: f32,
    pub rise_distance: f32,

    // --- Wert ---
    pub progress_count: u32,
    pub initial_position: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            bar_corner_radius: 4.0,
            bar_vertical_offset: 1.2,
            bar_inner_horizontal_offset: 0.0,

            top_circle_diameter: 0.8,
            bottom_circle_diameter: 25.0,
            touch_circle_diameter: 1.0,
            label_circle_diameter: 1.0,

            top_spread_factor: 0.4,
            bottom_start_spread_factor: 0.25,
            bottom_end_spread_factor: 0.1,
            handle_rate: 1.4,
            max_distance: 15.0,
            rise_distance: 1.2,

            progress_count: 20,
            initial_position: 0.5,
        }
    }
}

impl SliderConfig {
    /// Liest eine TOML-Konfiguration; fehlende Felder bekommen Standardwerte.
    pub fn from_toml_str(source: &str) -> SliderResult<Self> {
        let config: SliderConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> SliderResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> SliderResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> SliderResult<()> {
        let unit_ranged = [
            ("top_spread_factor", self.top_spread_factor),
            ("bottom_start_spread_factor", self.bottom_start_spread_factor),
            ("bottom_end_spread_factor", self.bottom_end_spread_factor),
            ("initial_position", self.initial_position),
        ];
        for (field, value) in unit_ranged {
            if !(0.0..=1.0).contains(&value) {
                return Err(SliderError::InvalidConfiguration {
                    field,
                    message: format!("must be in [0, 1], got {value}"),
                });
            }
        }

        let positive = [
            ("top_circle_diameter", self.top_circle_diameter),
            ("bottom_circle_diameter", self.bottom_circle_diameter),
            ("touch_circle_diameter", self.touch_circle_diameter),
            ("label_circle_diameter", self.label_circle_diameter),
            ("max_distance", self.max_distance),
            ("rise_distance", self.rise_distance),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SliderError::InvalidConfiguration {
                    field,
                    message: format!("must be finite and > 0, got {value}"),
                });
            }
        }

        let non_negative = [
            ("bar_corner_radius", self.bar_corner_radius),
            ("bar_vertical_offset", self.bar_vertical_offset),
            ("bar_inner_horizontal_offset", self.bar_inner_horizontal_offset),
            ("handle_rate", self.handle_rate),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SliderError::InvalidConfiguration {
                    field,
                    message: format!("must be finite and >= 0, got {value}"),
                });
            }
        }

        if self.progress_count == 0 {
            return Err(SliderError::InvalidConfiguration {
                field: "progress_count",
                message: "must be > 0".to_string(),
            });
        }

        // Form in Pixeln prüfen (Skalierung ändert die Wertebereiche nicht)
        self.metaball_shape(1.0, 1.0).validate()?;

        Ok(())
    }

    /// Einzige Stelle, an der Balkenhöhen-Einheiten zu Pixeln werden.
    pub fn metaball_shape(&self, bar_height_px: f32, density: f32) -> MetaballShape {
        MetaballShape {
            top_spread_factor: self.top_spread_factor,
            bottom_start_spread_factor: self.bottom_start_spread_factor,
            bottom_end_spread_factor: self.bottom_end_spread_factor,
            handle_rate: self.handle_rate,
            max_distance: self.max_distance * bar_height_px,
            rise_limit: self.rise_distance * bar_height_px,
            corner_radius: self.bar_corner_radius * density,
        }
    }
}
