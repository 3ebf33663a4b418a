// src/math/types/circle.rs

use crate::math::{error::*, types::*};

/// Kreis in Bildschirmkoordinaten. Invariante: `radius >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f32,
}

impl Circle {
    /// Negative Radien werden auf 0 geklemmt.
    pub fn new(center: Point2D, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Wie `new`, lehnt aber negative oder nicht-endliche Werte ab.
    pub fn try_new(center: Point2D, radius: f32) -> MathResult<Self> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(MathError::NonFiniteValue {
                what: format!("circle center {:?}", center),
            });
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(MathError::InvalidRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Kreis aus einem quadratischen Rechteck, Radius = halbe Breite.
    pub fn from_bounds(bounds: Bounds2D) -> Self {
        Self::new(bounds.center(), bounds.width() / 2.0)
    }

    /// Kreis mit gegebenem Durchmesser, dessen Oberkante bei `top` liegt.
    pub fn from_top(center_x: f32, top: f32, diameter: f32) -> Self {
        let radius = diameter.max(0.0) / 2.0;
        Self::new(Point2D::new(center_x, top + radius), radius)
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.radius
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_ltrb(self.left(), self.top(), self.right(), self.bottom())
    }

    /// Horizontal auf `x` zentriert, y bleibt.
    pub fn with_center_x(self, x: f32) -> Self {
        Self {
            center: Point2D::new(x, self.center.y),
            ..self
        }
    }

    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            center: self.center + Point2D::new(dx, dy),
            ..self
        }
    }

    pub fn contains_point(&self, point: Point2D) -> bool {
        self.center.distance(point) <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_negative_radius() {
        let c = Circle::new(Point2D::ZERO, -3.0);
        assert_eq!(c.radius, 0.0);
    }

    #[test]
    fn test_try_new_rejects_invalid() {
        assert_eq!(
            Circle::try_new(Point2D::ZERO, -1.0),
            Err(MathError::InvalidRadius { radius: -1.0 })
        );
        assert!(Circle::try_new(Point2D::ZERO, f32::NAN).is_err());
        assert!(Circle::try_new(Point2D::new(f32::INFINITY, 0.0), 1.0).is_err());
        assert!(Circle::try_new(Point2D::ZERO, 0.0).is_ok());
    }

    #[test]
    fn test_rect_round_trip() {
        let c = Circle::from_bounds(Bounds2D::from_ltrb(25.0, 75.0, 75.0, 125.0));
        assert_eq!(c.center, Point2D::new(50.0, 100.0));
        assert_eq!(c.radius, 25.0);
        assert_eq!(c.top(), 75.0);
        assert_eq!(c.bounds(), Bounds2D::from_ltrb(25.0, 75.0, 75.0, 125.0));
    }

    #[test]
    fn test_from_top_and_recenter() {
        let c = Circle::from_top(0.0, 30.0, 20.0).with_center_x(50.0);
        assert_eq!(c.center, Point2D::new(50.0, 40.0));
        assert_eq!(c.top(), 30.0);
        let moved = c.translated(0.0, -10.0);
        assert_eq!(moved.top(), 20.0);
        assert!(moved.contains_point(Point2D::new(50.0, 30.0)));
    }
}
