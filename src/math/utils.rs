// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const PI: f32 = std::f32::consts::PI;
    pub const PI_OVER_2: f32 = std::f32::consts::PI / 2.0;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;
    use bevy::math::Vec2;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// Klemmt auf [-1, 1], bevor ein Wert in `acos`/`asin` geht.
    /// NaN bleibt NaN, tritt bei gültigen Kreisen aber nicht auf.
    pub fn clamp_unit(value: f32) -> f32 {
        value.clamp(-1.0, 1.0)
    }

    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Beide Komponenten endlich (kein NaN, kein ±∞)
    pub fn is_finite_vec2(v: Vec2) -> bool {
        v.x.is_finite() && v.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::comparison::*;
    use bevy::math::Vec2;

    #[test]
    fn test_clamp_unit_absorbs_drift() {
        assert_eq!(clamp_unit(1.000_000_1), 1.0);
        assert_eq!(clamp_unit(-1.000_000_1), -1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert!(clamp_unit(1.000_000_1).acos().is_finite());
    }

    #[test]
    fn test_lerp() {
        assert!(nearly_equal(lerp(0.25, 0.1, 0.0), 0.25));
        assert!(nearly_equal(lerp(0.25, 0.1, 1.0), 0.1));
        assert!(nearly_equal_eps(lerp(0.0, 10.0, 0.5), 5.0, 1e-4));
    }

    #[test]
    fn test_is_finite_vec2() {
        assert!(is_finite_vec2(Vec2::new(1.0, -2.0)));
        assert!(!is_finite_vec2(Vec2::new(f32::NAN, 0.0)));
        assert!(!is_finite_vec2(Vec2::new(0.0, f32::INFINITY)));
    }
}
