//! Line rect collection: one bounding box per visual line a range touches.

use std::ops::Range;

use glam::dvec2;

use crate::layout::{HighlightRange, LayoutSnapshot, LineFragment, RangeId};
use crate::log::trace;
use crate::types::Rect;

/// Bounding box of the glyphs of one range on one visual line
#[derive(Debug, Clone, PartialEq)]
pub struct LineRect {
    pub line_index: usize,
    pub range_id: RangeId,
    pub rect: Rect,
    /// Glyphs of the range that fall on this line
    pub glyph_range: Range<usize>,
}

impl LineRect {
    pub fn new(line_index: usize, range_id: RangeId, rect: Rect, glyph_range: Range<usize>) -> Self {
        Self {
            line_index,
            range_id,
            rect,
            glyph_range,
        }
    }

    pub fn x(&self) -> f64 {
        self.rect.left()
    }

    pub fn y(&self) -> f64 {
        self.rect.top()
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}

/// Collect the per-line rects of `range`, ordered by ascending line index.
///
/// Lines the range covers entirely from before their first glyph to after
/// their last use the full line box. Other lines use the union of the covered
/// glyph boxes, with the line's full height. Empty ranges and ranges outside
/// the layout produce nothing.
pub fn collect_line_rects(range: &HighlightRange, layout: &LayoutSnapshot) -> Vec<LineRect> {
    if range.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<&LineFragment> = layout.lines.iter().collect();
    lines.sort_by_key(|line| line.index);

    let mut rects = Vec::new();
    for line in lines {
        let start = range.glyphs.start.max(line.glyph_range.start);
        let end = range.glyphs.end.min(line.glyph_range.end);
        if start >= end {
            continue;
        }

        let interior = range.glyphs.start < line.glyph_range.start
            && range.glyphs.end > line.glyph_range.end;
        let rect = if interior {
            Some(line.bounds)
        } else {
            glyph_span(line, start..end)
        };
        let Some(rect) = rect else {
            continue;
        };

        trace!(line = line.index, %rect, "collected line rect");
        rects.push(LineRect::new(line.index, range.id, rect, start..end));
    }
    rects
}

/// Union of the glyph boxes in `glyphs`, spanning the full line height.
fn glyph_span(line: &LineFragment, glyphs: Range<usize>) -> Option<Rect> {
    let mut boxes = glyphs.filter_map(|g| line.glyph(g));
    let first = boxes.next()?;
    let (left, right) = boxes.fold((first.x, first.right()), |(l, r), g| {
        (l.min(g.x), r.max(g.right()))
    });
    Some(Rect::from_corners(
        dvec2(left, line.bounds.top()),
        dvec2(right, line.bounds.bottom()),
    ))
}
