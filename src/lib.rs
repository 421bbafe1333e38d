//! Rounded background paths for highlighted text.
//!
//! Given the line geometry a text layout engine produced and a set of
//! highlighted glyph ranges, this crate computes one smooth filled outline per
//! run of adjacent lines: padded per-line boxes merged into a single shape,
//! rounded on the outside and kept sharp where the outline turns inward.
//!
//! ```rust
//! use hlpath::{Config, LayoutSnapshot, compute_paths, ranges_from_text};
//!
//! let layout = LayoutSnapshot::monospaced(&["hello world"], 8.0, 16.0);
//! let ranges = ranges_from_text("hello world");
//! let paths = compute_paths(&ranges, &layout, &Config::default());
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].contours.len(), 1);
//! ```

pub mod config;
pub mod errors;
pub mod host;
pub mod layout;
pub mod log;
pub mod parse;
pub mod render;
pub mod types;

pub use config::Config;
pub use errors::{ConfigError, RenderError};
pub use host::{HighlightHost, Highlighter, StaticHost};
pub use layout::{GlyphBox, HighlightRange, LayoutSnapshot, LineFragment, RangeId, ranges_from_text};
pub use render::{
    Contour, FillRule, FillSurface, PathCache, RoundedPath, SvgSurface, compute_paths, render_paths,
};
pub use types::{Color, Rect, Sides};

/// Render the highlight paths as a standalone SVG document.
///
/// The view box covers the layout and every painted path.
pub fn highlight_svg(
    ranges: &[HighlightRange],
    layout: &LayoutSnapshot,
    config: &Config,
) -> Result<String, RenderError> {
    let paths = compute_paths(ranges, layout, config);

    let view_box = layout
        .lines
        .iter()
        .map(|line| line.bounds)
        .chain(paths.iter().filter_map(RoundedPath::bounds))
        .reduce(|a, b| a.union(&b))
        .unwrap_or_default();

    let mut surface = SvgSurface::new();
    render_paths(&paths, &mut surface, FillRule::NonZero);
    surface.finish(view_box)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_for_a_single_word() {
        let layout = LayoutSnapshot::monospaced(&["word"], 10.0, 20.0);
        let ranges = vec![HighlightRange::new(0, 0..4)];
        let config = Config::new().with_padding(0.0).with_corner_radius(0.0);
        let svg = highlight_svg(&ranges, &layout, &config).unwrap();
        assert!(svg.contains("M0 0 L40 0 L40 20 L0 20 L0 0 Z"));
        assert!(svg.contains("0 0 40 20"));
    }

    #[test]
    fn empty_input_still_serializes() {
        let svg = highlight_svg(&[], &LayoutSnapshot::default(), &Config::default()).unwrap();
        assert!(svg.contains("svg"));
    }
}
