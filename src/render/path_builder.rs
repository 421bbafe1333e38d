//! Rounded path builder for runs.
//!
//! This module turns a run (a stack of normalized rects) into one closed
//! contour. The outline is walked once, clockwise on screen, collecting the
//! silhouette's vertices; each vertex is then emitted either as a sharp corner
//! or as a quarter-circle arc joined to its neighbours by straight edges.
//!
//! # Key Concepts
//!
//! - **Silhouette walk**: start at the first rect's top-left, go along its top
//!   edge, down the right side of the stack, along the last rect's bottom
//!   edge and back up the left side.
//!
//! - **Convex vs concave**: the outer corners of the stack and the corner
//!   where a wider line steps out from a narrower one are convex and rounded.
//!   Corners where the outline turns inward stay sharp, so the stack reads as
//!   a single shape.
//!
//! - **Local radius clamp**: a rounded vertex never takes more than the
//!   length of either adjacent edge, or half of it when the vertex at the
//!   other end is rounded too. A single rect therefore rounds by at most
//!   `min(width, height) / 2`.

use glam::{DVec2, dvec2};

use crate::log::warn;
use crate::render::defaults::EPSILON;
use crate::render::geometry::{ArcSegment, Contour, LineSegment, Segment};
use crate::render::runs::Run;
use crate::types::{Rect, clamp_non_negative};

/// One corner of the silhouette
#[derive(Debug, Clone, Copy, PartialEq)]
struct Vertex {
    point: DVec2,
    rounded: bool,
}

/// Collects silhouette vertices and emits the rounded contour.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    radius: f64,
    vertices: Vec<Vertex>,
}

impl PathBuilder {
    /// Start an empty outline whose rounded corners use `radius`.
    pub fn new(radius: f64) -> Self {
        Self {
            radius: clamp_non_negative(radius),
            vertices: Vec::new(),
        }
    }

    /// Append a vertex. Repeating the previous point is a no-op.
    pub fn corner(&mut self, point: DVec2, rounded: bool) {
        match self.vertices.last_mut() {
            Some(last) if last.point.distance(point) <= EPSILON => last.rounded &= rounded,
            _ => self.vertices.push(Vertex { point, rounded }),
        }
    }

    /// Walk the outline of a stack of rects, top to bottom.
    ///
    /// Consecutive rects must share their horizontal seam and overlap
    /// horizontally.
    pub fn stack(&mut self, rects: &[Rect]) {
        let (Some(first), Some(last)) = (rects.first(), rects.last()) else {
            return;
        };

        self.corner(dvec2(first.left(), first.top()), true);
        self.corner(dvec2(first.right(), first.top()), true);

        // Right side, downward
        for pair in rects.windows(2) {
            let (upper, lower) = (pair[0], pair[1]);
            let seam = upper.bottom();
            if (lower.right() - upper.right()).abs() > EPSILON {
                let outward = lower.right() > upper.right();
                // The upper vertex is concave on an outward step and sits on
                // an inward step otherwise: sharp either way
                self.corner(dvec2(upper.right(), seam), false);
                self.corner(dvec2(lower.right(), seam), outward);
            }
        }

        self.corner(dvec2(last.right(), last.bottom()), true);
        self.corner(dvec2(last.left(), last.bottom()), true);

        // Left side, upward
        for pair in rects.windows(2).rev() {
            let (upper, lower) = (pair[0], pair[1]);
            let seam = upper.bottom();
            if (lower.left() - upper.left()).abs() > EPSILON {
                let outward = lower.left() < upper.left();
                // Mirror of the right side: only the lower vertex can round
                self.corner(dvec2(lower.left(), seam), outward);
                self.corner(dvec2(upper.left(), seam), false);
            }
        }
    }

    /// Number of vertices collected so far.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Radius each vertex gets after the local clamp; zero for sharp ones.
    fn radii(&self) -> Vec<f64> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| {
                let v = self.vertices[i];
                if !v.rounded {
                    return 0.0;
                }
                let prev = self.vertices[(i + n - 1) % n];
                let next = self.vertices[(i + 1) % n];
                let share = |other: Vertex| {
                    let len = v.point.distance(other.point);
                    if other.rounded { len / 2.0 } else { len }
                };
                let r = self.radius.min(share(prev)).min(share(next));
                if r > EPSILON { r } else { 0.0 }
            })
            .collect()
    }

    /// Emit the closed contour. The contour starts where the first vertex's
    /// corner begins.
    pub fn build(self) -> Contour {
        let n = self.vertices.len();
        if n < 3 {
            return Contour::default();
        }
        let radii = self.radii();

        let mut segments = Vec::with_capacity(n * 2);
        for i in 0..n {
            let v = self.vertices[i].point;
            let prev = self.vertices[(i + n - 1) % n].point;
            let next = self.vertices[(i + 1) % n].point;
            let d_in = (v - prev).normalize_or_zero();
            let d_out = (next - v).normalize_or_zero();

            let r = radii[i];
            let exit = v + d_out * r;
            if r > 0.0 {
                let entry = v - d_in * r;
                let center = entry + d_out * r;
                segments.push(Segment::from(ArcSegment::quarter(center, r, entry, exit)));
            }

            let next_entry = next - d_out * radii[(i + 1) % n];
            if exit.distance(next_entry) > EPSILON {
                segments.push(Segment::from(LineSegment::new(exit, next_entry)));
            }
        }
        Contour::new(segments)
    }
}

/// Build the contours for one run: normally exactly one.
///
/// A run that breaks the segmenter's guarantees trips a debug assertion; in
/// release builds each of its rects is filled as a sharp rectangle instead.
pub fn build_run(run: &Run, radius: f64) -> Vec<Contour> {
    let well_formed = run.is_well_formed();
    debug_assert!(well_formed, "malformed run: {run:?}");
    if !well_formed {
        warn!(range = run.range_id().0, "malformed run, filling sharp rects");
        return run
            .rects()
            .filter(|r| !r.is_empty())
            .map(Contour::rect)
            .collect();
    }

    let rects: Vec<Rect> = run.rects().collect();
    let mut builder = PathBuilder::new(radius);
    builder.stack(&rects);
    vec![builder.build()]
}
