// src/math/geometry/primitives.rs

use crate::math::types::Point2D;

/// Euklidischer Abstand zweier Punkte
pub fn distance(a: Point2D, b: Point2D) -> f32 {
    distance_xy(a.x, a.y, b.x, b.y)
}

/// Wie `distance`, für lose Koordinaten
pub fn distance_xy(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// Vektor mit Winkel (Radiant) und Länge: `(cos·len, sin·len)`
pub fn polar_offset(angle_rad: f32, length: f32) -> Point2D {
    Point2D::new(angle_rad.cos() * length, angle_rad.sin() * length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::constants::{PI, PI_OVER_2};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_distance() {
        assert_abs_diff_eq!(distance_xy(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_abs_diff_eq!(
            distance(Point2D::new(50.0, 100.0), Point2D::new(50.0, 40.0)),
            60.0
        );
        assert_eq!(distance(Point2D::ONE, Point2D::ONE), 0.0);
    }

    #[test]
    fn test_polar_offset() {
        let right = polar_offset(0.0, 2.0);
        assert_abs_diff_eq!(right.x, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(right.y, 0.0, epsilon = 1e-6);

        // y zeigt nach unten: -π/2 ist "oben"
        let up = polar_offset(-PI_OVER_2, 10.0);
        assert_abs_diff_eq!(up.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(up.y, -10.0, epsilon = 1e-5);

        let left = polar_offset(PI, 1.0);
        assert_abs_diff_eq!(left.x, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(polar_offset(1.234, 7.0).length(), 7.0, epsilon = 1e-5);
    }
}
