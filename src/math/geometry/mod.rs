// src/math/geometry/mod.rs

pub mod metaball;
pub mod primitives;

// Re-Exporte für einen schnellen Zugriff
pub use self::metaball::{
    CubicSegment, DetachReason, MetaballAnchors, MetaballOutcome, MetaballPath,
    MetaballPathBuilder, MetaballShape, PathSegment, SegmentKind, build_metaball_path,
};
pub use self::primitives::{distance, distance_xy, polar_offset};
