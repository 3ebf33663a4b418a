pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            metaball::{
                DetachReason, MetaballAnchors, MetaballOutcome, MetaballPath, MetaballPathBuilder,
                MetaballShape, PathSegment, build_metaball_path,
            },
            primitives::{distance, distance_xy, polar_offset},
        },
        types::*,
    };
}
