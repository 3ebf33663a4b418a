// src/slider/frame.rs

use super::{
    config::SliderConfig,
    layout::{SliderLayout, SliderMetrics, progress_label},
};
use crate::math::{
    geometry::metaball::{MetaballOutcome, MetaballPath, MetaballPathBuilder},
    types::*,
};

/// Welche Farbe eine Form bekommt; die konkreten Farben setzt der Renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fill {
    Bar,
    Bubble,
}

/// Ein Zeichenbefehl, in Zeichenreihenfolge.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RoundRect {
        bounds: Bounds2D,
        corner_radius: f32,
        fill: Fill,
    },
    Path {
        path: MetaballPath,
        fill: Fill,
    },
    Circle {
        circle: Circle,
        fill: Fill,
    },
}

impl DrawCommand {
    pub fn bounds(&self) -> Option<Bounds2D> {
        match self {
            DrawCommand::RoundRect { bounds, .. } => Some(*bounds),
            DrawCommand::Path { path, .. } => path.bounds(),
            DrawCommand::Circle { circle, .. } => Some(circle.bounds()),
        }
    }
}

/// Alles, was für einen Frame gezeichnet wird.
///
/// Wird jedes Frame neu aufgebaut und danach verworfen.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame {
    pub layout: SliderLayout,
    pub outcome: MetaballOutcome,
    pub commands: Vec<DrawCommand>,
    pub label: String,
}

impl SliderFrame {
    /// `position` kommt vom Eingabe-Treiber, `rise_offset` (in Balkenhöhen,
    /// negativ = oben) vom Animations-Treiber.
    pub fn compose(
        config: &SliderConfig,
        metrics: &SliderMetrics,
        position: f32,
        rise_offset: f32,
    ) -> Self {
        let layout = SliderLayout::compute(config, metrics, position, rise_offset);
        let shape = config.metaball_shape(metrics.bar_height_px, metrics.density);
        let outcome = MetaballPathBuilder::new().with_shape(shape).build(
            layout.bottom_circle,
            layout.top_circle,
            layout.bar_top_boundary(),
        );

        let mut commands = vec![DrawCommand::RoundRect {
            bounds: layout.bar,
            corner_radius: layout.bar_corner_radius,
            fill: Fill::Bar,
        }];

        // Scheibe des oberen Kreises deckt die Linie durch seinen Mittelpunkt ab
        if let Some(path) = outcome.path() {
            commands.push(DrawCommand::Path {
                path: path.clone(),
                fill: Fill::Bar,
            });
            commands.push(DrawCommand::Circle {
                circle: layout.top_circle,
                fill: Fill::Bar,
            });
        }

        commands.push(DrawCommand::Circle {
            circle: layout.label_circle,
            fill: Fill::Bubble,
        });

        Self {
            layout,
            outcome,
            commands,
            label: progress_label(config, layout.position),
        }
    }

    pub fn should_draw_bridge(&self) -> bool {
        self.outcome.should_draw()
    }

    /// Box um alle Zeichenbefehle
    pub fn bounds(&self) -> Bounds2D {
        self.commands
            .iter()
            .filter_map(DrawCommand::bounds)
            .fold(Bounds2D::empty(), |acc, b| acc.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::metaball::DetachReason;

    fn metrics() -> SliderMetrics {
        SliderMetrics::new(320.0, 20.0, 1.0)
    }

    #[test]
    fn test_resting_label_sits_inside_thumb() {
        // Ohne Rise liegt der obere Kreis innen am Rand des Daumens
        let frame = SliderFrame::compose(&SliderConfig::default(), &metrics(), 0.5, 0.0);
        assert!(!frame.should_draw_bridge());
        assert_eq!(frame.outcome.detach_reason(), Some(DetachReason::Contained));
        assert_eq!(frame.commands.len(), 2);
        assert!(matches!(frame.commands[0], DrawCommand::RoundRect { .. }));
        assert!(matches!(
            frame.commands[1],
            DrawCommand::Circle {
                fill: Fill::Bubble,
                ..
            }
        ));
        assert_eq!(frame.label, "10");
    }

    #[test]
    fn test_raised_frame_draws_bridge() {
        let config = SliderConfig::default();
        let frame = SliderFrame::compose(&config, &metrics(), 0.25, -config.rise_distance);
        assert!(frame.should_draw_bridge());
        assert_eq!(frame.commands.len(), 4);

        match (&frame.commands[1], &frame.commands[2]) {
            (
                DrawCommand::Path { path, fill },
                DrawCommand::Circle {
                    circle,
                    fill: disc_fill,
                },
            ) => {
                assert!(path.is_finite());
                assert_eq!(*fill, Fill::Bar);
                assert_eq!(*disc_fill, Fill::Bar);
                assert_eq!(*circle, frame.layout.top_circle);
                assert!(path.anchors().rise_ratio > 0.999);
            }
            other => panic!("unexpected draw order: {other:?}"),
        }
    }

    #[test]
    fn test_bridge_appears_during_rise() {
        let config = SliderConfig::default();
        let drawn: Vec<bool> = (0..=10)
            .map(|i| {
                let rise = -config.rise_distance * i as f32 / 10.0;
                SliderFrame::compose(&config, &metrics(), 0.5, rise).should_draw_bridge()
            })
            .collect();
        assert!(!drawn[0]);
        assert!(drawn[10]);
        // einmal verbunden, bleibt verbunden
        let first = drawn.iter().position(|d| *d).unwrap();
        assert!(drawn[first..].iter().all(|d| *d));
    }

    #[test]
    fn test_frame_bounds_cover_bar() {
        let frame = SliderFrame::compose(&SliderConfig::default(), &metrics(), 0.0, -1.2);
        let bounds = frame.bounds();
        assert!(bounds.contains_point(frame.layout.bar.min));
        assert!(bounds.contains_point(frame.layout.bar.max));
        assert!(bounds.contains_point(frame.layout.label_circle.center));
    }
}
