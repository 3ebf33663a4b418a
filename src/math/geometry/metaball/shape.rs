// src/math/geometry/metaball/shape.rs

use crate::math::error::{MathError, MathResult};
use serde::{Deserialize, Serialize};

/// Formparameter der Brücke, alle Längen in Pixeln.
///
/// Pro Slider-Instanz unveränderlich; die Umrechnung aus Balkenhöhen-Einheiten
/// passiert einmalig in `SliderConfig::metaball_shape`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaballShape {
    /// Wie weit sich die Taille am oberen Kreis öffnet, [0, 1].
    pub top_spread_factor: f32,
    /// Spread am unteren Kreis bei Rise 0, [0, 1].
    pub bottom_start_spread_factor: f32,
    /// Spread am unteren Kreis bei vollem Rise, [0, 1].
    pub bottom_end_spread_factor: f32,
    /// Multiplikator für die Länge der Bézier-Tangenten.
    pub handle_rate: f32,
    /// Ab diesem Mittelpunktabstand wird keine Brücke mehr gezeichnet.
    pub max_distance: f32,
    /// Strecke, über die der Rise von 0 auf 1 interpoliert.
    pub rise_limit: f32,
    /// Länge der senkrechten Stummel an den Pfadenden.
    pub corner_radius: f32,
}

impl Default for MetaballShape {
    fn default() -> Self {
        Self {
            top_spread_factor: 0.4,
            bottom_start_spread_factor: 0.25,
            bottom_end_spread_factor: 0.1,
            handle_rate: 1.4,
            max_distance: 100.0,
            rise_limit: 20.0,
            corner_radius: 4.0,
        }
    }
}

impl MetaballShape {
    /// Alle Werte endlich?
    pub fn is_finite(&self) -> bool {
        [
            self.top_spread_factor,
            self.bottom_start_spread_factor,
            self.bottom_end_spread_factor,
            self.handle_rate,
            self.max_distance,
            self.rise_limit,
            self.corner_radius,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Prüft die Wertebereiche. `build` selbst schlägt nie fehl, liefert bei
    /// unsinnigen Parametern aber unbrauchbare Formen.
    pub fn validate(&self) -> MathResult<()> {
        if !self.is_finite() {
            return Err(MathError::NonFiniteValue {
                what: "metaball shape parameter".to_string(),
            });
        }

        let unit_ranged = [
            ("top_spread_factor", self.top_spread_factor),
            ("bottom_start_spread_factor", self.bottom_start_spread_factor),
            ("bottom_end_spread_factor", self.bottom_end_spread_factor),
        ];
        for (name, value) in unit_ranged {
            if !(0.0..=1.0).contains(&value) {
                return Err(MathError::InvalidConfiguration {
                    message: format!("{name} must be in [0, 1], got {value}"),
                });
            }
        }

        let non_negative = [
            ("handle_rate", self.handle_rate),
            ("max_distance", self.max_distance),
            ("rise_limit", self.rise_limit),
            ("corner_radius", self.corner_radius),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(MathError::InvalidConfiguration {
                    message: format!("{name} must be >= 0, got {value}"),
                });
            }
        }

        Ok(())
    }
}
