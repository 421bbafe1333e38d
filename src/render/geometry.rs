//! Output geometry: contours made of straight edges and quarter-circle corners.

use enum_dispatch::enum_dispatch;
use facet_svg::PathData;
use glam::{DVec2, dvec2};

use crate::layout::RangeId;
use crate::types::{Color, Rect};

/// Common queries over one contour segment
#[enum_dispatch]
pub trait SegmentGeometry {
    fn start(&self) -> DVec2;

    fn end(&self) -> DVec2;

    fn length(&self) -> f64;

    /// This segment's share of `½∮(x dy − y dx)`. Summed over a closed contour
    /// it gives the enclosed area, positive for clockwise-on-screen winding.
    fn area_term(&self) -> f64;

    /// Smallest rect containing the segment.
    fn bounds(&self) -> Rect;
}

/// Straight edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: DVec2,
    pub to: DVec2,
}

impl LineSegment {
    pub fn new(from: DVec2, to: DVec2) -> Self {
        Self { from, to }
    }
}

impl SegmentGeometry for LineSegment {
    fn start(&self) -> DVec2 {
        self.from
    }

    fn end(&self) -> DVec2 {
        self.to
    }

    fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    fn area_term(&self) -> f64 {
        0.5 * self.from.perp_dot(self.to)
    }

    fn bounds(&self) -> Rect {
        Rect::from_corners(self.from, self.to)
    }
}

/// Circular arc swept with increasing angle (clockwise on a Y-down screen).
///
/// The endpoints are stored alongside the angles so that path output does not
/// pick up trigonometric noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    from: DVec2,
    to: DVec2,
}

impl ArcSegment {
    /// Quarter circle from `from` to `to` around `center`.
    pub fn quarter(center: DVec2, radius: f64, from: DVec2, to: DVec2) -> Self {
        let rel = from - center;
        let start_angle = rel.y.atan2(rel.x);
        Self {
            center,
            radius,
            start_angle,
            end_angle: start_angle + std::f64::consts::FRAC_PI_2,
            from,
            to,
        }
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    fn point_at(&self, angle: f64) -> DVec2 {
        self.center + self.radius * dvec2(angle.cos(), angle.sin())
    }
}

impl SegmentGeometry for ArcSegment {
    fn start(&self) -> DVec2 {
        self.from
    }

    fn end(&self) -> DVec2 {
        self.to
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep().abs()
    }

    fn area_term(&self) -> f64 {
        let (a, b) = (self.start_angle, self.end_angle);
        let (c, r) = (self.center, self.radius);
        0.5 * (c.x * r * (b.sin() - a.sin()) - c.y * r * (b.cos() - a.cos()) + r * r * (b - a))
    }

    fn bounds(&self) -> Rect {
        let mut bounds = Rect::from_corners(self.from, self.to);
        // Include any axis extreme the sweep passes through
        let quarter = std::f64::consts::FRAC_PI_2;
        let (lo, hi) = if self.start_angle <= self.end_angle {
            (self.start_angle, self.end_angle)
        } else {
            (self.end_angle, self.start_angle)
        };
        let mut k = (lo / quarter).floor() + 1.0;
        while k * quarter < hi {
            let p = self.point_at(k * quarter);
            bounds = bounds.union(&Rect::from_corners(p, p));
            k += 1.0;
        }
        bounds
    }
}

#[enum_dispatch(SegmentGeometry)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    Arc(ArcSegment),
}

/// One closed outline, the outline of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    segments: Vec<Segment>,
}

impl Contour {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Sharp-cornered outline of a rect, clockwise from the top-left corner.
    pub fn rect(rect: Rect) -> Self {
        let corners = [
            rect.min,
            dvec2(rect.right(), rect.top()),
            rect.max,
            dvec2(rect.left(), rect.bottom()),
        ];
        let segments = (0..4)
            .map(|i| Segment::from(LineSegment::new(corners[i], corners[(i + 1) % 4])))
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Point where the outline starts and ends
    pub fn start(&self) -> Option<DVec2> {
        self.segments.first().map(|s| s.start())
    }

    /// Enclosed area. Positive for clockwise-on-screen winding.
    pub fn area(&self) -> f64 {
        self.segments.iter().map(|s| s.area_term()).sum()
    }

    /// Perimeter length
    pub fn length(&self) -> f64 {
        self.segments.iter().map(|s| s.length()).sum()
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.segments
            .iter()
            .map(|s| s.bounds())
            .reduce(|a, b| a.union(&b))
    }

    /// True when every segment starts where the previous one ended, wrapping
    /// around from the last segment to the first.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        let n = self.segments.len();
        n > 0
            && (0..n).all(|i| {
                self.segments[i]
                    .end()
                    .distance(self.segments[(i + 1) % n].start())
                    <= tolerance
            })
    }

    /// SVG path data: `M`, then `L`/`A` per segment, then `Z`.
    pub fn to_path_data(&self) -> PathData {
        let Some(start) = self.start() else {
            return PathData::new();
        };
        let mut d = PathData::new().m(start.x, start.y);
        for segment in &self.segments {
            d = match segment {
                Segment::Line(line) => d.l(line.to.x, line.to.y),
                Segment::Arc(arc) => {
                    let to = arc.end();
                    d.a(
                        arc.radius,
                        arc.radius,
                        0.0,
                        arc.sweep().abs() > std::f64::consts::PI,
                        arc.sweep() > 0.0,
                        to.x,
                        to.y,
                    )
                }
            };
        }
        d.z()
    }
}

/// Fill geometry for one highlighted range: one contour per run.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedPath {
    pub range_id: RangeId,
    pub color: Color,
    pub contours: Vec<Contour>,
}

impl RoundedPath {
    pub fn area(&self) -> f64 {
        self.contours.iter().map(Contour::area).sum()
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.contours
            .iter()
            .filter_map(Contour::bounds)
            .reduce(|a, b| a.union(&b))
    }

    /// All contours as one `d` attribute, each closed with `Z`.
    pub fn to_path_data(&self) -> String {
        self.contours
            .iter()
            .map(|c| c.to_path_data().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn rect_contour_area_and_length() {
        let contour = Contour::rect(Rect::new(10.0, 10.0, 50.0, 20.0));
        assert!(contour.is_closed(EPSILON));
        assert!((contour.area() - 1000.0).abs() < EPSILON);
        assert!((contour.length() - 140.0).abs() < EPSILON);
        assert_eq!(
            contour.to_path_data().to_string(),
            "M10 10 L60 10 L60 30 L10 30 L10 10 Z"
        );
    }

    #[test]
    fn quarter_arc_angles() {
        // Top-left corner of a rect, entering upward and leaving rightward
        let arc = ArcSegment::quarter(dvec2(12.0, 13.0), 4.0, dvec2(8.0, 13.0), dvec2(12.0, 9.0));
        assert!((arc.start_angle - PI).abs() < EPSILON);
        assert!((arc.sweep() - PI / 2.0).abs() < EPSILON);
        assert!((arc.length() - 2.0 * PI).abs() < EPSILON);
        let bounds = arc.bounds();
        assert_eq!(bounds, Rect::new(8.0, 9.0, 4.0, 4.0));
    }

    #[test]
    fn full_circle_from_four_quarters() {
        let c = dvec2(5.0, 5.0);
        let r = 2.0;
        let pts = [dvec2(3.0, 5.0), dvec2(5.0, 3.0), dvec2(7.0, 5.0), dvec2(5.0, 7.0)];
        let segments = (0..4)
            .map(|i| Segment::from(ArcSegment::quarter(c, r, pts[i], pts[(i + 1) % 4])))
            .collect();
        let contour = Contour::new(segments);
        assert!(contour.is_closed(EPSILON));
        assert!((contour.area() - PI * r * r).abs() < EPSILON);
        assert_eq!(contour.bounds(), Some(Rect::new(3.0, 3.0, 4.0, 4.0)));
    }

    #[test]
    fn empty_contour() {
        let contour = Contour::default();
        assert!(contour.is_empty());
        assert!(!contour.is_closed(EPSILON));
        assert_eq!(contour.area(), 0.0);
        assert!(contour.bounds().is_none());
        assert!(contour.to_path_data().is_empty());
    }
}
