// src/math/geometry/metaball/mod.rs

pub mod builder; // MetaballPathBuilder, build_metaball_path
pub mod path; // PathSegment, MetaballPath
pub mod shape; // MetaballShape

pub use self::builder::{
    DetachReason, MetaballOutcome, MetaballPathBuilder, blend_with_rise_ratio, build_metaball_path,
    rise_ratio,
};
pub use self::path::{CubicSegment, MetaballAnchors, MetaballPath, PathSegment, SegmentKind};
pub use self::shape::MetaballShape;
