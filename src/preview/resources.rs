use crate::slider::SliderMetrics;
use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Resource, Debug, Clone)]
pub struct PreviewSettings {
    /// Optionale TOML-Konfiguration; fehlt sie, gelten die Standardwerte.
    pub config_path: PathBuf,
    pub output_dir: PathBuf,
    /// Anzahl Frames von "liegt auf" bis "voll angehoben"
    pub frame_count: u32,
    pub metrics: SliderMetrics,
    /// `None` -> `initial_position` aus der Konfiguration
    pub position: Option<f32>,
    pub show_anchors: bool,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("fluid_slider.toml"),
            output_dir: PathBuf::from("preview_frames"),
            frame_count: 12,
            metrics: SliderMetrics::default(),
            position: None,
            show_anchors: true,
        }
    }
}

#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct PreviewProgress {
    pub next_frame: u32,
    pub written: u32,
    /// Frames, in denen die Brücke gezeichnet wurde
    pub bridged: u32,
}
