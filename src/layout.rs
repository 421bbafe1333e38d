//! Host layout snapshot and highlighted ranges.
//!
//! The host text-layout engine owns line breaking and glyph placement; this
//! module only describes the read-only view of its result that one render
//! pass consumes.

use std::hash::{Hash, Hasher};
use std::ops::Range;

use glam::dvec2;

use crate::types::{Color, Rect};

/// Identifier of one highlighted range. Runs never merge across identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RangeId(pub u32);

/// A contiguous span of glyphs marked for background rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightRange {
    pub id: RangeId,
    /// Half-open glyph index range
    pub glyphs: Range<usize>,
    /// Overrides the configured background color for this range
    pub color: Option<Color>,
}

impl HighlightRange {
    pub fn new(id: u32, glyphs: Range<usize>) -> Self {
        Self {
            id: RangeId(id),
            glyphs,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.start >= self.glyphs.end
    }
}

impl Hash for HighlightRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.glyphs.start.hash(state);
        self.glyphs.end.hash(state);
        self.color.hash(state);
    }
}

/// Horizontal placement of one glyph on its line.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GlyphBox {
    /// Left edge in host coordinates
    pub x: f64,
    /// Advance width; zero for collapsed whitespace
    pub advance: f64,
}

impl GlyphBox {
    pub fn new(x: f64, advance: f64) -> Self {
        Self { x, advance }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.advance
    }
}

/// One visual line as laid out by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFragment {
    /// Visual line index, increasing top to bottom
    pub index: usize,
    /// Line box: full measured width and line height
    pub bounds: Rect,
    /// Glyphs laid out on this line
    pub glyph_range: Range<usize>,
    /// `glyphs[i]` belongs to glyph `glyph_range.start + i`
    pub glyphs: Vec<GlyphBox>,
}

impl LineFragment {
    /// Placement of an absolute glyph index, if it lies on this line.
    pub fn glyph(&self, glyph: usize) -> Option<&GlyphBox> {
        if !self.glyph_range.contains(&glyph) {
            return None;
        }
        self.glyphs.get(glyph - self.glyph_range.start)
    }
}

/// Read-only line geometry for one render pass, ordered by line index.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LayoutSnapshot {
    pub lines: Vec<LineFragment>,
}

impl LayoutSnapshot {
    pub fn new(lines: Vec<LineFragment>) -> Self {
        Self { lines }
    }

    /// Lay out already-wrapped lines on a fixed grid, one glyph per char.
    ///
    /// Glyph indices run continuously across lines, so a range that covers
    /// the end of one line and the start of the next wraps the way soft-wrapped
    /// text does. Used by the demo and the tests.
    pub fn monospaced(lines: &[&str], advance: f64, line_height: f64) -> Self {
        let mut next_glyph = 0;
        let fragments = lines
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let count = text.chars().count();
                let y = index as f64 * line_height;
                let glyphs = (0..count)
                    .map(|col| GlyphBox::new(col as f64 * advance, advance))
                    .collect();
                let fragment = LineFragment {
                    index,
                    bounds: Rect::from_corners(
                        dvec2(0.0, y),
                        dvec2(count as f64 * advance, y + line_height),
                    ),
                    glyph_range: next_glyph..next_glyph + count,
                    glyphs,
                };
                next_glyph += count;
                fragment
            })
            .collect();
        Self { lines: fragments }
    }

    /// Hash of everything that affects geometry. Floats hash by bit pattern.
    pub fn geometry_hash(&self) -> u64 {
        let mut hasher = std::hash::DefaultHasher::new();
        self.lines.len().hash(&mut hasher);
        for line in &self.lines {
            line.index.hash(&mut hasher);
            for v in [
                line.bounds.min.x,
                line.bounds.min.y,
                line.bounds.max.x,
                line.bounds.max.y,
            ] {
                v.to_bits().hash(&mut hasher);
            }
            line.glyph_range.start.hash(&mut hasher);
            line.glyph_range.end.hash(&mut hasher);
            for glyph in &line.glyphs {
                glyph.x.to_bits().hash(&mut hasher);
                glyph.advance.to_bits().hash(&mut hasher);
            }
        }
        hasher.finish()
    }
}

/// Derive highlighted ranges from plain text, treating glyph index as char index.
///
/// Every character is highlighted except newlines, tabs and spaces that touch
/// another space: a single space between words keeps the highlight going, a run
/// of spaces breaks it. Each resulting span gets its own [`RangeId`], starting
/// at zero.
pub fn ranges_from_text(text: &str) -> Vec<HighlightRange> {
    let chars: Vec<char> = text.chars().collect();
    let highlighted = |i: usize| match chars[i] {
        '\n' | '\t' => false,
        ' ' => {
            let before = i > 0 && chars[i - 1] == ' ';
            let after = i + 1 < chars.len() && chars[i + 1] == ' ';
            !before && !after
        }
        _ => true,
    };

    let mut ranges = Vec::new();
    let mut start = None;
    for i in 0..chars.len() {
        match (highlighted(i), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                ranges.push(HighlightRange::new(ranges.len() as u32, s..i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push(HighlightRange::new(ranges.len() as u32, s..chars.len()));
    }
    ranges
}
