use super::resources::{PreviewProgress, PreviewSettings};
use crate::debug::svg::{SvgOptions, save_frame_svg};
use crate::slider::{SliderConfig, SliderError, SliderFrame};
use bevy::app::AppExit;
use bevy::prelude::*;
use std::io::ErrorKind;

/// Rise-Offset (Balkenhöhen, negativ = oben) für Frame `frame` von `frame_count`.
/// Linear von 0 bis `-rise_distance`; die echte Feder-Animation liefert der Aufrufer.
pub fn rise_offset_for_frame(frame: u32, frame_count: u32, rise_distance: f32) -> f32 {
    if frame_count <= 1 {
        return -rise_distance;
    }
    let t = (frame.min(frame_count - 1) as f32) / (frame_count - 1) as f32;
    -rise_distance * t
}

/// Lädt die Slider-Konfiguration und legt das Ausgabeverzeichnis an.
pub fn load_config_system(mut commands: Commands, settings: Res<PreviewSettings>) {
    let config = match SliderConfig::from_toml_file(&settings.config_path) {
        Ok(config) => {
            info!("Loaded slider config from {}", settings.config_path.display());
            config
        }
        Err(SliderError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            info!(
                "No config at {}, using defaults.",
                settings.config_path.display()
            );
            SliderConfig::default()
        }
        Err(err) => {
            warn!("Ignoring {}: {}", settings.config_path.display(), err);
            SliderConfig::default()
        }
    };

    if let Err(err) = std::fs::create_dir_all(&settings.output_dir) {
        error!(
            "Cannot create output dir {}: {}",
            settings.output_dir.display(),
            err
        );
    }

    commands.insert_resource(config);
}

/// Rendert pro Update genau einen Frame; nach dem letzten wird die App beendet.
pub fn render_frame_system(
    settings: Res<PreviewSettings>,
    config: Res<SliderConfig>,
    mut progress: ResMut<PreviewProgress>,
    mut exit: EventWriter<AppExit>,
) {
    if progress.next_frame >= settings.frame_count {
        info!(
            "Preview done: {} of {} frames written, bridge visible in {}.",
            progress.written, settings.frame_count, progress.bridged
        );
        exit.send(AppExit);
        return;
    }

    let index = progress.next_frame;
    let rise = rise_offset_for_frame(index, settings.frame_count, config.rise_distance);
    let position = settings.position.unwrap_or(config.initial_position);
    let frame = SliderFrame::compose(&config, &settings.metrics, position, rise);

    match frame.outcome.detach_reason() {
        None => progress.bridged += 1,
        Some(reason) => debug!("Frame {}: no bridge ({:?})", index, reason),
    }

    let options = SvgOptions {
        show_anchors: settings.show_anchors,
        ..Default::default()
    };
    let filename = settings.output_dir.join(format!("frame_{index:03}.svg"));
    match save_frame_svg(&filename, &frame, &options) {
        Ok(()) => progress.written += 1,
        Err(err) => error!("Frame {}: {}", index, err),
    }

    progress.next_frame += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rise_offset_sweep() {
        assert_eq!(rise_offset_for_frame(0, 5, 1.2), 0.0);
        assert_abs_diff_eq!(rise_offset_for_frame(2, 5, 1.2), -0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(rise_offset_for_frame(4, 5, 1.2), -1.2, epsilon = 1e-6);
        assert_abs_diff_eq!(rise_offset_for_frame(9, 5, 1.2), -1.2, epsilon = 1e-6);
        assert_eq!(rise_offset_for_frame(0, 1, 1.2), -1.2);
    }

    #[test]
    fn test_render_frames_then_exit() {
        let output_dir = std::env::temp_dir().join("fluid_slider_preview_test");
        let _ = std::fs::remove_dir_all(&output_dir);
        std::fs::create_dir_all(&output_dir).unwrap();

        let mut app = App::new();
        app.add_event::<AppExit>()
            .insert_resource(PreviewSettings {
                output_dir: output_dir.clone(),
                frame_count: 3,
                ..Default::default()
            })
            .insert_resource(SliderConfig::default())
            .init_resource::<PreviewProgress>()
            .add_systems(Update, render_frame_system);

        for _ in 0..3 {
            app.update();
        }
        let progress = app.world.resource::<PreviewProgress>().clone();
        assert_eq!(progress.next_frame, 3);
        assert_eq!(progress.written, 3);
        // erster Frame liegt auf, letzter ist voll angehoben
        assert_eq!(progress.bridged, 2);
        assert!(output_dir.join("frame_002.svg").exists());

        app.update();
        let exits = app.world.resource::<Events<AppExit>>();
        assert!(!exits.is_empty());

        std::fs::remove_dir_all(&output_dir).unwrap();
    }
}
