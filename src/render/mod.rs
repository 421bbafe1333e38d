//! Highlight path rendering
//!
//! This module is organized into submodules, one per pipeline stage:
//! - `collect`: per-line rects of a highlighted range
//! - `padding`: insets and padding
//! - `runs`: grouping of adjacent rects into runs
//! - `path_builder`: rounded contour of one run
//! - `geometry`: segments, contours and paths
//! - `surface`: the drawing surface trait
//! - `svg`: SVG output surface
//! - `cache`: single-entry memo of computed paths
//! - `defaults`: default settings and tolerances

pub mod cache;
pub mod collect;
pub mod defaults;
pub mod geometry;
pub mod padding;
pub mod path_builder;
pub mod runs;
pub mod surface;
pub mod svg;

pub use cache::PathCache;
pub use collect::{LineRect, collect_line_rects};
pub use geometry::{ArcSegment, Contour, LineSegment, RoundedPath, Segment, SegmentGeometry};
pub use padding::{PaddedRect, expand};
pub use path_builder::{PathBuilder, build_run};
pub use runs::{LinePosition, Run, RunMember, segment};
pub use surface::{FillRule, FillSurface, render_paths};
pub use svg::SvgSurface;

use crate::config::Config;
use crate::layout::{HighlightRange, LayoutSnapshot};
use crate::log::debug;

/// Compute the fill geometry of every highlighted range.
///
/// Ranges are processed independently and in order; a range that paints
/// nothing (empty, outside the layout, or fully inset away) yields no entry.
/// Each returned path holds one contour per run of its range.
pub fn compute_paths(
    ranges: &[HighlightRange],
    layout: &LayoutSnapshot,
    config: &Config,
) -> Vec<RoundedPath> {
    let radius = config.resolved_radius();
    let mut paths = Vec::with_capacity(ranges.len());

    for range in ranges {
        let lines = collect_line_rects(range, layout);
        let padded = padding::expand_all(&lines, config);
        let runs = segment(padded);
        let contours: Vec<Contour> = runs
            .iter()
            .flat_map(|run| build_run(run, radius))
            .filter(|c| !c.is_empty())
            .collect();

        debug!(
            range = range.id.0,
            lines = lines.len(),
            runs = runs.len(),
            "computed highlight path"
        );

        if contours.is_empty() {
            continue;
        }
        paths.push(RoundedPath {
            range_id: range.id,
            color: range.color.unwrap_or(config.background_color),
            contours,
        });
    }
    paths
}
