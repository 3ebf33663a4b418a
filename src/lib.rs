// ./src/lib.rs
pub mod debug;
pub mod math;
pub mod preview;
pub mod slider;

pub use math::geometry::metaball::{
    DetachReason, MetaballOutcome, MetaballPath, MetaballPathBuilder, MetaballShape,
    build_metaball_path,
};
pub use slider::{SliderConfig, SliderFrame, SliderMetrics};
