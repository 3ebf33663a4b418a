// ./src/main.rs
use bevy::log::LogPlugin;
use bevy::prelude::*;

use fluid_slider::preview::{
    resources::{PreviewProgress, PreviewSettings},
    systems::{load_config_system, render_frame_system},
};

fn main() {
    App::new()
        // Kein Fenster: ScheduleRunner + Logging reichen
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .init_resource::<PreviewSettings>()
        .init_resource::<PreviewProgress>()
        .add_systems(Startup, load_config_system)
        .add_systems(Update, render_frame_system)
        .run();
}
