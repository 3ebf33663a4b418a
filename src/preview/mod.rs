// src/preview/mod.rs
pub mod resources;
pub mod systems;
