//! Adapter between a host view and the highlight pipeline.
//!
//! A host view provides its current line geometry, highlighted ranges and
//! settings through [`HighlightHost`]; a [`Highlighter`] owned by the view
//! turns them into paths at draw time and hands them to the view's drawing
//! surface.

use crate::config::Config;
use crate::layout::{HighlightRange, LayoutSnapshot, ranges_from_text};
use crate::log::debug;
use crate::render::{FillRule, FillSurface, PathCache, RoundedPath, render_paths};

/// What the pipeline needs from the enclosing view for one render pass
pub trait HighlightHost {
    fn line_geometry(&self) -> &LayoutSnapshot;

    fn highlight_ranges(&self) -> &[HighlightRange];

    fn configuration(&self) -> &Config;
}

/// Per-view draw helper. Holds the path cache between draws.
#[derive(Debug, Default)]
pub struct Highlighter {
    cache: PathCache,
    fill_rule: FillRule,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    /// Current paths for the host, reusing the previous result when nothing
    /// changed.
    pub fn paths<H: HighlightHost + ?Sized>(&mut self, host: &H) -> &[RoundedPath] {
        self.cache.get_or_compute(
            host.highlight_ranges(),
            host.line_geometry(),
            host.configuration(),
        )
    }

    /// Fill the host's highlight paths on `surface`. Returns the number of
    /// contours drawn.
    pub fn draw<H, S>(&mut self, host: &H, surface: &mut S) -> usize
    where
        H: HighlightHost + ?Sized,
        S: FillSurface + ?Sized,
    {
        let rule = self.fill_rule;
        let paths = self.paths(host);
        render_paths(paths, surface, rule);
        let contours = paths.iter().map(|p| p.contours.len()).sum();
        debug!(contours, "drew highlight");
        contours
    }

    /// Forget cached paths, e.g. after the host view was detached.
    pub fn reset(&mut self) {
        self.cache.invalidate();
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }
}

/// A host whose inputs are plain owned values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticHost {
    pub layout: LayoutSnapshot,
    pub ranges: Vec<HighlightRange>,
    pub config: Config,
}

impl StaticHost {
    pub fn new(layout: LayoutSnapshot, ranges: Vec<HighlightRange>, config: Config) -> Self {
        Self {
            layout,
            ranges,
            config,
        }
    }

    /// Highlight soft-wrapped text laid out on a fixed grid.
    ///
    /// `lines` are the visual lines of one paragraph; the wrap points add no
    /// glyphs, so a highlight continues across them. A `'\n'` the caller
    /// leaves at the end of a line is a glyph of that line and breaks the
    /// highlight there.
    pub fn wrapped(lines: &[&str], advance: f64, line_height: f64, config: Config) -> Self {
        let layout = LayoutSnapshot::monospaced(lines, advance, line_height);
        let ranges = ranges_from_text(&lines.concat());
        Self::new(layout, ranges, config)
    }

    /// Highlight text whose lines all end in a hard break.
    ///
    /// Each break counts as one glyph, so every line gets its own highlight.
    pub fn from_lines(lines: &[&str], advance: f64, line_height: f64, config: Config) -> Self {
        let with_breaks: Vec<String> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i + 1 < lines.len() {
                    format!("{line}\n")
                } else {
                    (*line).to_string()
                }
            })
            .collect();
        let refs: Vec<&str> = with_breaks.iter().map(String::as_str).collect();
        Self::wrapped(&refs, advance, line_height, config)
    }
}

impl HighlightHost for StaticHost {
    fn line_geometry(&self) -> &LayoutSnapshot {
        &self.layout
    }

    fn highlight_ranges(&self) -> &[HighlightRange] {
        &self.ranges
    }

    fn configuration(&self) -> &Config {
        &self.config
    }
}
