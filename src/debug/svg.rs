// src/debug/svg.rs
use crate::math::{
    geometry::metaball::{MetaballPath, PathSegment},
    types::*,
};
use crate::slider::{
    error::SliderResult,
    frame::{DrawCommand, Fill, SliderFrame},
};
use bevy::log::info;
use std::path::Path as FsPath;
use svg::{Document, Node};
use svg::node::element::{Circle as SvgCircle, Line, Path, Rectangle, path::Data};

/// Farben und Optionen für den Export.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub bar_color: String,
    pub bubble_color: String,
    pub background: String,
    /// Tangentenpunkte und Handles der Brücke mit einzeichnen
    pub show_anchors: bool,
    /// Rand um die Zeichnung in Pixeln
    pub margin: f32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            bar_color: "#6168E7".to_string(),
            bubble_color: "#6168E7".to_string(),
            background: "#FFFFFF".to_string(),
            show_anchors: false,
            margin: 8.0,
        }
    }
}

// ===================================================================================
// HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
struct SvgBuilder {
    document: Document,
    marker_radius: f32,
    stroke_w_thin: f32,
}

impl SvgBuilder {
    /// Grundgerüst mit ViewBox und Hintergrund.
    fn new(display_bounds: &Bounds2D, background: &str) -> Self {
        let (x, y) = (display_bounds.left(), display_bounds.top());
        let (w, h) = (display_bounds.width(), display_bounds.height());
        let stroke_w_thin = (w + h) / 2.0 * 0.002;

        let document = Document::new()
            .set("viewBox", (x, y, w, h))
            .set("width", w)
            .set("height", h)
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", w)
                    .set("height", h)
                    .set("fill", background),
            );

        Self {
            document,
            marker_radius: (w + h) / 2.0 * 0.006,
            stroke_w_thin,
        }
    }

    fn add<N: Into<Box<dyn Node>>>(&mut self, node: N) {
        self.document.append(node);
    }

    fn draw_round_rect(&mut self, bounds: &Bounds2D, corner_radius: f32, color: &str) {
        self.add(
            Rectangle::new()
                .set("x", bounds.left())
                .set("y", bounds.top())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("rx", corner_radius)
                .set("ry", corner_radius)
                .set("fill", color),
        );
    }

    fn draw_circle(&mut self, circle: &Circle, color: &str) {
        self.add(
            SvgCircle::new()
                .set("cx", circle.center.x)
                .set("cy", circle.center.y)
                .set("r", circle.radius)
                .set("fill", color),
        );
    }

    fn draw_path(&mut self, path: &MetaballPath, color: &str) {
        self.add(Path::new().set("fill", color).set("d", path_data(path)));
    }

    fn draw_marker(&mut self, point: Point2D, color: &str) {
        self.add(
            SvgCircle::new()
                .set("cx", point.x)
                .set("cy", point.y)
                .set("r", self.marker_radius)
                .set("fill", color),
        );
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D, color: &str) {
        self.add(
            Line::new()
                .set("x1", from.x)
                .set("y1", from.y)
                .set("x2", to.x)
                .set("y2", to.y)
                .set("stroke", color)
                .set("stroke-width", self.stroke_w_thin),
        );
    }

    fn draw_anchors(&mut self, path: &MetaballPath) {
        let a = path.anchors();
        for i in 0..2 {
            let bottom = a.adjusted_bottom_points[i];
            let top = a.top_points[i];
            self.draw_line(bottom, bottom + a.bottom_handles[i], "#CC0000");
            self.draw_line(top, top + a.top_handles[i], "#CC0000");
            self.draw_marker(a.bottom_points[i], "#FFAA00");
            self.draw_marker(bottom, "#CC0000");
            self.draw_marker(top, "#00AA00");
        }
    }

    fn finish(self) -> Document {
        self.document
    }
}

/// Pfadsegmente als SVG-`d`-Attribut
pub fn path_data(path: &MetaballPath) -> Data {
    path.segments()
        .iter()
        .fold(Data::new(), |data, segment| match *segment {
            PathSegment::MoveTo(p) => data.move_to(vec![p.x, p.y]),
            PathSegment::LineTo(p) => data.line_to(vec![p.x, p.y]),
            PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                data.cubic_curve_to(vec![ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y])
            }
            PathSegment::Close => data.close(),
        })
}

/// Baut das SVG-Dokument für einen Frame.
pub fn frame_to_document(frame: &SliderFrame, options: &SvgOptions) -> Document {
    let bounds = frame.bounds().expand(options.margin);
    let mut svg = SvgBuilder::new(&bounds, &options.background);

    let color = |fill: Fill| match fill {
        Fill::Bar => options.bar_color.as_str(),
        Fill::Bubble => options.bubble_color.as_str(),
    };

    for command in &frame.commands {
        match command {
            DrawCommand::RoundRect {
                bounds,
                corner_radius,
                fill,
            } => svg.draw_round_rect(bounds, *corner_radius, color(*fill)),
            DrawCommand::Path { path, fill } => svg.draw_path(path, color(*fill)),
            DrawCommand::Circle { circle, fill } => svg.draw_circle(circle, color(*fill)),
        }
    }

    if options.show_anchors {
        if let Some(path) = frame.outcome.path() {
            svg.draw_anchors(path);
        }
    }

    svg.finish()
}

/// Speichert einen Frame als SVG-Datei.
pub fn save_frame_svg(
    filename: impl AsRef<FsPath>,
    frame: &SliderFrame,
    options: &SvgOptions,
) -> SliderResult<()> {
    let document = frame_to_document(frame, options);
    svg::save(filename.as_ref(), &document)?;
    info!("Debug SVG '{}' wurde erstellt.", filename.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::{SliderConfig, SliderMetrics};

    fn raised_frame() -> SliderFrame {
        let config = SliderConfig::default();
        SliderFrame::compose(
            &config,
            &SliderMetrics::new(320.0, 20.0, 1.0),
            0.3,
            -config.rise_distance,
        )
    }

    #[test]
    fn test_path_data_commands() {
        let frame = raised_frame();
        let data = path_data(frame.outcome.path().unwrap());
        // M, L, C, L, L, C, L, Z
        assert_eq!(data.len(), 8);
    }

    #[test]
    fn test_document_contains_bridge() {
        let frame = raised_frame();
        let text = frame_to_document(&frame, &SvgOptions::default()).to_string();
        assert!(text.contains("<path"));
        assert!(text.contains("#6168E7"));
        assert_eq!(text.matches("<circle").count(), 2);
        assert!(text.contains("rx=\"4\""));
    }

    #[test]
    fn test_detached_frame_has_no_path() {
        let frame = SliderFrame::compose(
            &SliderConfig::default(),
            &SliderMetrics::default(),
            0.5,
            0.0,
        );
        let options = SvgOptions {
            show_anchors: true,
            ..Default::default()
        };
        let text = frame_to_document(&frame, &options).to_string();
        assert!(!text.contains("<path"));
        assert!(!text.contains("<line"));
    }

    #[test]
    fn test_anchor_overlay() {
        let options = SvgOptions {
            show_anchors: true,
            ..Default::default()
        };
        let text = frame_to_document(&raised_frame(), &options).to_string();
        assert_eq!(text.matches("<line").count(), 4);
        // 2 Formen + 6 Marker
        assert_eq!(text.matches("<circle").count(), 8);
    }

    #[test]
    fn test_save_frame_svg() {
        let path = std::env::temp_dir().join("fluid_slider_debug_svg_test.svg");
        save_frame_svg(&path, &raised_frame(), &SvgOptions::default()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        std::fs::remove_file(&path).unwrap();
    }
}
