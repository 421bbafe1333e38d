//! Padding expansion of collected line rects.

use std::ops::Range;

use crate::config::Config;
use crate::layout::RangeId;
use crate::render::collect::LineRect;
use crate::types::Rect;

/// A line rect after insets and padding are applied
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedRect {
    pub line_index: usize,
    pub range_id: RangeId,
    pub glyph_range: Range<usize>,
    /// Line box after background insets, before padding
    pub content: Rect,
    /// Painted box
    pub rect: Rect,
}

/// Inset the line box, then grow it by the configured padding on all sides.
///
/// Vertical padding between two lines of the same run is settled later when
/// the run's seams are placed, so every rect is padded the same way here.
pub fn expand(line: &LineRect, config: &Config) -> PaddedRect {
    let content = line.rect.deflate(config.resolved_insets());
    PaddedRect {
        line_index: line.line_index,
        range_id: line.range_id,
        glyph_range: line.glyph_range.clone(),
        content,
        rect: content.inflate(config.resolved_padding()),
    }
}

/// Expand every line rect of one range.
pub fn expand_all(lines: &[LineRect], config: &Config) -> Vec<PaddedRect> {
    lines.iter().map(|line| expand(line, config)).collect()
}
