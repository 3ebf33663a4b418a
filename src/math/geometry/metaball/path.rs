// src/math/geometry/metaball/path.rs

use crate::math::{types::*, utils::comparison};

/// Ein Element eines Zeichenpfads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point2D),
    LineTo(Point2D),
    CubicTo {
        ctrl1: Point2D,
        ctrl2: Point2D,
        to: Point2D,
    },
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    MoveTo,
    LineTo,
    CubicTo,
    Close,
}

impl PathSegment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            PathSegment::MoveTo(_) => SegmentKind::MoveTo,
            PathSegment::LineTo(_) => SegmentKind::LineTo,
            PathSegment::CubicTo { .. } => SegmentKind::CubicTo,
            PathSegment::Close => SegmentKind::Close,
        }
    }

    /// Endpunkt des Segments (`None` für `Close`)
    pub fn end_point(&self) -> Option<Point2D> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::CubicTo { to, .. } => Some(to),
            PathSegment::Close => None,
        }
    }

    /// Alle Koordinaten inkl. Kontrollpunkte, in Pfadreihenfolge
    pub fn points(&self) -> Vec<Point2D> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => vec![p],
            PathSegment::CubicTo { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
            PathSegment::Close => Vec::new(),
        }
    }

    fn translated(self, offset: Point2D) -> Self {
        match self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(p + offset),
            PathSegment::LineTo(p) => PathSegment::LineTo(p + offset),
            PathSegment::CubicTo { ctrl1, ctrl2, to } => PathSegment::CubicTo {
                ctrl1: ctrl1 + offset,
                ctrl2: ctrl2 + offset,
                to: to + offset,
            },
            PathSegment::Close => PathSegment::Close,
        }
    }
}

/// Kubische Bézier-Kurve mit explizitem Startpunkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub from: Point2D,
    pub ctrl1: Point2D,
    pub ctrl2: Point2D,
    pub to: Point2D,
}

impl CubicSegment {
    /// Evaluiert die Kurve an Parameter t (0.0 bis 1.0)
    pub fn evaluate(&self, t: f32) -> Point2D {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let tt = t * t;
        let uu = u * u;

        self.from * (uu * u)
            + self.ctrl1 * (3.0 * uu * t)
            + self.ctrl2 * (3.0 * u * tt)
            + self.to * (tt * t)
    }
}

/// Zwischengrößen der Konstruktion, für Renderer und Tests.
///
/// Index 0 gehört zur Seite mit `+`-Winkeloffset (Punkt 1), Index 1 zur anderen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetaballAnchors {
    pub rise_ratio: f32,
    /// Interpolierter Spread des unteren Kreises
    pub bottom_spread: f32,
    pub bottom_angles: [f32; 2],
    pub top_angles: [f32; 2],
    /// Tangentenpunkte auf dem unteren Kreis, vor der vertikalen Verschiebung
    pub bottom_points: [Point2D; 2],
    /// Nach oben verschobene untere Punkte (dort beginnt die Kurve)
    pub adjusted_bottom_points: [Point2D; 2],
    pub top_points: [Point2D; 2],
    pub bottom_handles: [Point2D; 2],
    pub top_handles: [Point2D; 2],
    pub handle_scale: f32,
    pub vertical_offset: f32,
}

/// Geschlossener Umriss der Brücke zwischen den beiden Kreisen.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaballPath {
    segments: Vec<PathSegment>,
    anchors: MetaballAnchors,
}

impl MetaballPath {
    pub(crate) fn new(segments: Vec<PathSegment>, anchors: MetaballAnchors) -> Self {
        Self { segments, anchors }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn anchors(&self) -> &MetaballAnchors {
        &self.anchors
    }

    pub fn count(&self, kind: SegmentKind) -> usize {
        self.segments.iter().filter(|s| s.kind() == kind).count()
    }

    /// Alle Koordinaten des Pfads (Endpunkte und Kontrollpunkte)
    pub fn points(&self) -> Vec<Point2D> {
        self.segments.iter().flat_map(|s| s.points()).collect()
    }

    /// Kein NaN/∞ in irgendeiner Koordinate
    pub fn is_finite(&self) -> bool {
        self.points().into_iter().all(comparison::is_finite_vec2)
    }

    /// Die Kurvensegmente mit ihren Startpunkten
    pub fn cubics(&self) -> Vec<CubicSegment> {
        let mut cubics = Vec::new();
        let mut current = None;
        let mut subpath_start = None;

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    current = Some(p);
                    subpath_start = Some(p);
                }
                PathSegment::LineTo(p) => current = Some(p),
                PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                    if let Some(from) = current {
                        cubics.push(CubicSegment {
                            from,
                            ctrl1,
                            ctrl2,
                            to,
                        });
                    }
                    current = Some(to);
                }
                PathSegment::Close => current = subpath_start,
            }
        }
        cubics
    }

    /// Box um alle Kontrollpunkte. Eine Bézier-Kurve liegt in der konvexen
    /// Hülle ihrer Kontrollpunkte, die Box ist also konservativ.
    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.points())
    }

    pub fn translated(&self, offset: Point2D) -> Self {
        let mut anchors = self.anchors;
        for p in anchors
            .bottom_points
            .iter_mut()
            .chain(anchors.adjusted_bottom_points.iter_mut())
            .chain(anchors.top_points.iter_mut())
        {
            *p += offset;
        }

        Self {
            segments: self.segments.iter().map(|s| s.translated(offset)).collect(),
            anchors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn dummy_anchors() -> MetaballAnchors {
        MetaballAnchors {
            rise_ratio: 0.0,
            bottom_spread: 0.0,
            bottom_angles: [0.0; 2],
            top_angles: [0.0; 2],
            bottom_points: [Point2D::ZERO; 2],
            adjusted_bottom_points: [Point2D::ZERO; 2],
            top_points: [Point2D::ZERO; 2],
            bottom_handles: [Point2D::ZERO; 2],
            top_handles: [Point2D::ZERO; 2],
            handle_scale: 0.0,
            vertical_offset: 0.0,
        }
    }

    fn sample_path() -> MetaballPath {
        MetaballPath::new(
            vec![
                PathSegment::MoveTo(Point2D::new(0.0, 0.0)),
                PathSegment::CubicTo {
                    ctrl1: Point2D::new(1.0, 1.0),
                    ctrl2: Point2D::new(2.0, 1.0),
                    to: Point2D::new(3.0, 0.0),
                },
                PathSegment::LineTo(Point2D::new(3.0, -2.0)),
                PathSegment::Close,
            ],
            dummy_anchors(),
        )
    }

    #[test]
    fn test_cubic_evaluation() {
        let curve = sample_path().cubics()[0];
        assert_eq!(curve.evaluate(0.0), Point2D::new(0.0, 0.0));
        assert_eq!(curve.evaluate(1.0), Point2D::new(3.0, 0.0));
        let mid = curve.evaluate(0.5);
        assert_abs_diff_eq!(mid.x, 1.5, epsilon = 1e-6);
        assert_abs_diff_eq!(mid.y, 0.75, epsilon = 1e-6);
    }

    #[test]
    fn test_counts_and_points() {
        let path = sample_path();
        assert_eq!(path.count(SegmentKind::MoveTo), 1);
        assert_eq!(path.count(SegmentKind::CubicTo), 1);
        assert_eq!(path.count(SegmentKind::LineTo), 1);
        assert_eq!(path.count(SegmentKind::Close), 1);
        assert_eq!(path.points().len(), 5);
        assert!(path.is_finite());
        assert_eq!(PathSegment::Close.end_point(), None);
    }

    #[test]
    fn test_bounds_and_translate() {
        let path = sample_path();
        let bounds = path.bounds().unwrap();
        assert_eq!(bounds, Bounds2D::from_ltrb(0.0, -2.0, 3.0, 1.0));

        let moved = path.translated(Point2D::new(10.0, 5.0));
        assert_eq!(
            moved.bounds().unwrap(),
            bounds.translate(Point2D::new(10.0, 5.0))
        );
        assert_eq!(moved.cubics()[0].from, Point2D::new(10.0, 5.0));
    }

    #[test]
    fn test_non_finite_detected() {
        let path = MetaballPath::new(
            vec![PathSegment::MoveTo(Point2D::new(f32::NAN, 0.0))],
            dummy_anchors(),
        );
        assert!(!path.is_finite());
    }
}
