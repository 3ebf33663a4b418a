// src/math/geometry/metaball/builder.rs

use super::{
    path::{MetaballAnchors, MetaballPath, PathSegment},
    shape::MetaballShape,
};
use crate::math::{
    geometry::primitives::{distance, polar_offset},
    types::*,
    utils::{
        comparison::{clamp_unit, is_finite_vec2},
        constants::{PI, PI_OVER_2},
    },
};
use bevy::log::trace;

/// Warum für diesen Frame keine Brücke entsteht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachReason {
    /// Einer der Radien ist 0.
    ZeroRadius,
    /// Mittelpunkte weiter als `max_distance` auseinander.
    TooFarApart,
    /// Ein Kreis liegt vollständig im anderen.
    Contained,
    /// NaN/∞ in Kreisen, Balkenkante oder Formparametern.
    NonFiniteInput,
}

/// Ergebnis eines Frames: entweder ein Pfad oder gar nichts.
///
/// Bei `Detached` zeichnet der Aufrufer beide Kreise ohne Brücke.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaballOutcome {
    Blended(MetaballPath),
    Detached(DetachReason),
}

impl MetaballOutcome {
    pub fn should_draw(&self) -> bool {
        matches!(self, MetaballOutcome::Blended(_))
    }

    pub fn path(&self) -> Option<&MetaballPath> {
        match self {
            MetaballOutcome::Blended(path) => Some(path),
            MetaballOutcome::Detached(_) => None,
        }
    }

    pub fn into_path(self) -> Option<MetaballPath> {
        match self {
            MetaballOutcome::Blended(path) => Some(path),
            MetaballOutcome::Detached(_) => None,
        }
    }

    pub fn detach_reason(&self) -> Option<DetachReason> {
        match self {
            MetaballOutcome::Blended(_) => None,
            MetaballOutcome::Detached(reason) => Some(*reason),
        }
    }
}

/// Builder zum Konfigurieren der Brückenform; `build` läuft einmal pro Frame.
///
/// Hält keinen veränderlichen Zustand, eine Instanz kann von beliebig vielen
/// Render-Durchläufen parallel benutzt werden.
#[derive(Debug, Clone, Default)]
pub struct MetaballPathBuilder {
    pub shape: MetaballShape,
}

impl MetaballPathBuilder {
    /// Erstellt einen neuen Builder mit Standardform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die gesamte Form.
    pub fn with_shape(mut self, shape: MetaballShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn top_spread_factor(mut self, factor: f32) -> Self {
        self.shape.top_spread_factor = factor.clamp(0.0, 1.0);
        self
    }

    /// Spread am unteren Kreis bei Rise 0 und bei vollem Rise.
    pub fn bottom_spread_factors(mut self, start: f32, end: f32) -> Self {
        self.shape.bottom_start_spread_factor = start.clamp(0.0, 1.0);
        self.shape.bottom_end_spread_factor = end.clamp(0.0, 1.0);
        self
    }

    pub fn handle_rate(mut self, rate: f32) -> Self {
        self.shape.handle_rate = rate.max(0.0);
        self
    }

    pub fn max_distance(mut self, distance: f32) -> Self {
        self.shape.max_distance = distance.max(0.0);
        self
    }

    pub fn rise_limit(mut self, limit: f32) -> Self {
        self.shape.rise_limit = limit.max(0.0);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.shape.corner_radius = radius.max(0.0);
        self
    }

    /// Berechnet den Umriss für einen Frame.
    pub fn build(&self, bottom: Circle, top: Circle, bar_top_boundary_y: f32) -> MetaballOutcome {
        blend(&bottom, &top, bar_top_boundary_y, &self.shape)
    }
}

/// Freie Variante mit allen Parametern einzeln.
#[allow(clippy::too_many_arguments)]
pub fn build_metaball_path(
    bottom: Circle,
    top: Circle,
    bar_top_boundary_y: f32,
    rise_limit: f32,
    max_distance: f32,
    corner_radius: f32,
    top_spread_factor: f32,
    bottom_start_spread_factor: f32,
    bottom_end_spread_factor: f32,
    handle_rate: f32,
) -> MetaballOutcome {
    let shape = MetaballShape {
        top_spread_factor,
        bottom_start_spread_factor,
        bottom_end_spread_factor,
        handle_rate,
        max_distance,
        rise_limit,
        corner_radius,
    };
    blend(&bottom, &top, bar_top_boundary_y, &shape)
}

/// Anteil [0, 1], um den der obere Kreis über die Balkenkante gestiegen ist.
///
/// `rise_limit <= 0` wird zur Stufe: 0 solange nicht gestiegen, sonst 1.
pub fn rise_ratio(top: &Circle, bar_top_boundary_y: f32, rise_limit: f32) -> f32 {
    let raised = bar_top_boundary_y - top.top();
    if rise_limit > 0.0 {
        (raised / rise_limit).clamp(0.0, 1.0)
    } else if raised > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Wie `build`, aber mit fest vorgegebenem Rise statt aus der Lage des oberen
/// Kreises abgeleitet. Werte außerhalb [0, 1] werden geklemmt.
pub fn blend_with_rise_ratio(
    bottom: Circle,
    top: Circle,
    bar_top_boundary_y: f32,
    rise_ratio: f32,
    shape: &MetaballShape,
) -> MetaballOutcome {
    if let Some(reason) = detach_reason(&bottom, &top, bar_top_boundary_y, shape) {
        trace!("Metaball detached: {:?}", reason);
        return MetaballOutcome::Detached(reason);
    }
    let rise_ratio = if rise_ratio.is_finite() {
        rise_ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    MetaballOutcome::Blended(assemble(&bottom, &top, bar_top_boundary_y, rise_ratio, shape))
}

fn blend(
    bottom: &Circle,
    top: &Circle,
    bar_top_boundary_y: f32,
    shape: &MetaballShape,
) -> MetaballOutcome {
    if let Some(reason) = detach_reason(bottom, top, bar_top_boundary_y, shape) {
        trace!("Metaball detached: {:?}", reason);
        return MetaballOutcome::Detached(reason);
    }
    let ratio = rise_ratio(top, bar_top_boundary_y, shape.rise_limit);
    MetaballOutcome::Blended(assemble(bottom, top, bar_top_boundary_y, ratio, shape))
}

fn detach_reason(
    bottom: &Circle,
    top: &Circle,
    bar_top_boundary_y: f32,
    shape: &MetaballShape,
) -> Option<DetachReason> {
    let inputs_finite = is_finite_vec2(bottom.center)
        && is_finite_vec2(top.center)
        && bottom.radius.is_finite()
        && top.radius.is_finite()
        && bar_top_boundary_y.is_finite()
        && shape.is_finite();
    if !inputs_finite {
        return Some(DetachReason::NonFiniteInput);
    }

    if bottom.radius <= 0.0 || top.radius <= 0.0 {
        return Some(DetachReason::ZeroRadius);
    }

    let center_distance = distance(bottom.center, top.center);
    if center_distance > shape.max_distance {
        return Some(DetachReason::TooFarApart);
    }
    // Enthält auch d == 0 bei gleichen Radien, danach gilt d > 0.
    if center_distance <= (bottom.radius - top.radius).abs() {
        return Some(DetachReason::Contained);
    }

    None
}

/// Konstruktion des Umrisses. Erwartet Eingaben, die `detach_reason` passiert haben.
fn assemble(
    bottom: &Circle,
    top: &Circle,
    bar_top_boundary_y: f32,
    rise_ratio: f32,
    shape: &MetaballShape,
) -> MetaballPath {
    let r_bottom = bottom.radius;
    let r_top = top.radius;
    let d = distance(bottom.center, top.center);

    // Überlappung: Winkel der Schnittpunkte über den Kosinussatz
    let (angle_offset_bottom, angle_offset_top) = if d < r_bottom + r_top {
        (
            clamp_unit((r_bottom * r_bottom + d * d - r_top * r_top) / (2.0 * r_bottom * d)).acos(),
            clamp_unit((r_top * r_top + d * d - r_bottom * r_bottom) / (2.0 * r_top * d)).acos(),
        )
    } else {
        (0.0, 0.0)
    };

    let delta = top.center - bottom.center;
    let base_angle = delta.y.atan2(delta.x);
    let angle_difference = clamp_unit((r_bottom - r_top) / d).acos();

    let bottom_spread = shape.bottom_start_spread_factor
        - (shape.bottom_start_spread_factor - shape.bottom_end_spread_factor) * rise_ratio;
    let top_spread = shape.top_spread_factor;

    let bottom_sweep = (angle_difference - angle_offset_bottom) * bottom_spread;
    let top_sweep = (PI - angle_offset_top - angle_difference) * top_spread;

    let bottom_angles = [
        base_angle + angle_offset_bottom + bottom_sweep,
        base_angle - angle_offset_bottom - bottom_sweep,
    ];
    let top_angles = [
        base_angle + PI - angle_offset_top - top_sweep,
        base_angle - PI + angle_offset_top + top_sweep,
    ];

    let bottom_points = bottom_angles.map(|a| bottom.center + polar_offset(a, r_bottom));
    let top_points = top_angles.map(|a| top.center + polar_offset(a, r_top));

    // Tangentenlänge: begrenzt durch Spread, Abstand der Punkte und Nähe der Kreise
    let combined_radius = r_bottom + r_top;
    let handle_scale = (top_spread.max(bottom_spread) * shape.handle_rate)
        .min(distance(bottom_points[0], top_points[0]) / combined_radius)
        * (2.0 * d / combined_radius).min(1.0);
    let bottom_handle_len = r_bottom * handle_scale;
    let top_handle_len = r_top * handle_scale;

    let bottom_handles = [
        polar_offset(bottom_angles[0] - PI_OVER_2, bottom_handle_len),
        polar_offset(bottom_angles[1] + PI_OVER_2, bottom_handle_len),
    ];
    let top_handles = [
        polar_offset(top_angles[0] + PI_OVER_2, top_handle_len),
        polar_offset(top_angles[1] - PI_OVER_2, top_handle_len),
    ];

    // Beim Steigen wandert der Fuß der Brücke zur Balkenkante
    let vertical_offset = (bar_top_boundary_y - bottom_points[0].y).abs() * rise_ratio - 1.0;
    let adjusted_bottom_points = bottom_points.map(|p| Point2D::new(p.x, p.y - vertical_offset));

    let nub = Point2D::new(0.0, shape.corner_radius);
    let [p1, p2] = adjusted_bottom_points;
    let [t1, t2] = top_points;

    let segments = vec![
        PathSegment::MoveTo(p1 + nub),
        PathSegment::LineTo(p1),
        PathSegment::CubicTo {
            ctrl1: p1 + bottom_handles[0],
            ctrl2: t1 + top_handles[0],
            to: t1,
        },
        PathSegment::LineTo(top.center),
        PathSegment::LineTo(t2),
        PathSegment::CubicTo {
            ctrl1: t2 + top_handles[1],
            ctrl2: p2 + bottom_handles[1],
            to: p2,
        },
        PathSegment::LineTo(p2 + nub),
        PathSegment::Close,
    ];

    MetaballPath::new(
        segments,
        MetaballAnchors {
            rise_ratio,
            bottom_spread,
            bottom_angles,
            top_angles,
            bottom_points,
            adjusted_bottom_points,
            top_points,
            bottom_handles,
            top_handles,
            handle_scale,
            vertical_offset,
        },
    )
}
