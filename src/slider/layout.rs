// src/slider/layout.rs

use super::config::SliderConfig;
use crate::math::types::*;

/// Pixelmaße des Canvas für einen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderMetrics {
    pub canvas_width: f32,
    pub bar_height_px: f32,
    /// Pixel pro dp
    pub density: f32,
}

impl SliderMetrics {
    pub fn new(canvas_width: f32, bar_height_px: f32, density: f32) -> Self {
        Self {
            canvas_width: canvas_width.max(0.0),
            bar_height_px: bar_height_px.max(0.0),
            density: density.max(0.0),
        }
    }
}

impl Default for SliderMetrics {
    fn default() -> Self {
        Self::new(320.0, 20.0, 1.0)
    }
}

/// Lage aller Formen eines Frames in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    pub bar: Bounds2D,
    pub bar_corner_radius: f32,
    /// Daumen, auf der Balkenkante verankert
    pub bottom_circle: Circle,
    /// Schwebender Kreis, um den Rise nach oben versetzt
    pub top_circle: Circle,
    pub touch_circle: Circle,
    pub label_circle: Circle,
    pub thumb_x: f32,
    pub position: f32,
}

impl SliderLayout {
    /// `position` in [0, 1] (wird geklemmt); `rise_offset` in Balkenhöhen,
    /// negativ heißt nach oben. Beide liefert der Aufrufer pro Frame.
    pub fn compute(
        config: &SliderConfig,
        metrics: &SliderMetrics,
        position: f32,
        rise_offset: f32,
    ) -> Self {
        let bar_h = metrics.bar_height_px;
        let position = if position.is_finite() {
            position.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let bar_top = bar_h * config.bar_vertical_offset;
        let bar = Bounds2D::from_ltrb(0.0, bar_top, metrics.canvas_width, bar_top + bar_h);

        let top_d = bar_h * config.top_circle_diameter;
        let bottom_d = bar_h * config.bottom_circle_diameter;
        let touch_d = bar_h * config.touch_circle_diameter;
        let label_d = bar_h * config.label_circle_diameter;

        let rising = rise_offset * bar_h;
        let inner = config.bar_inner_horizontal_offset;
        let max_movement = (metrics.canvas_width - touch_d - inner * 2.0).max(0.0);
        let thumb_x = inner + touch_d / 2.0 + max_movement * position;

        let label_top = bar_top + (top_d - label_d) / 2.0 + rising;

        Self {
            bar,
            bar_corner_radius: config.bar_corner_radius * metrics.density,
            bottom_circle: Circle::from_top(thumb_x, bar_top, bottom_d),
            top_circle: Circle::from_top(thumb_x, bar_top + rising, top_d),
            touch_circle: Circle::from_top(thumb_x, bar_top, touch_d),
            label_circle: Circle::from_top(thumb_x, label_top, label_d),
            thumb_x,
            position,
        }
    }

    /// Oberkante des Balkens, gegen die der Rise gemessen wird
    pub fn bar_top_boundary(&self) -> f32 {
        self.bar.top()
    }
}

/// Neue Position nach einer horizontalen Zieh-Bewegung um `drag_dx` Pixel.
pub fn position_after_drag(
    config: &SliderConfig,
    metrics: &SliderMetrics,
    position: f32,
    drag_dx: f32,
) -> f32 {
    let touch_d = metrics.bar_height_px * config.touch_circle_diameter;
    let max_movement = metrics.canvas_width - touch_d - config.bar_inner_horizontal_offset;
    if max_movement <= 0.0 || !drag_dx.is_finite() {
        return position.clamp(0.0, 1.0);
    }
    (position + drag_dx / max_movement).clamp(0.0, 1.0)
}

/// Ganzzahliger Fortschritt, der im Label steht.
pub fn progress_value(config: &SliderConfig, position: f32) -> u32 {
    (position.clamp(0.0, 1.0) * config.progress_count as f32).floor() as u32
}

pub fn progress_label(config: &SliderConfig, position: f32) -> String {
    progress_value(config, position).to_string()
}
