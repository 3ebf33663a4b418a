// src/math/types/mod.rs
pub mod bounds;
pub mod circle;

pub use bounds::*;
pub use circle::*;

// Re-export des Vektor-Typs, mit dem das ganze Crate rechnet
pub use bevy::math::Vec2;

/// Bildschirmkoordinaten: x nach rechts, y nach unten (Pixel).
pub type Point2D = Vec2;
