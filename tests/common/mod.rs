//! Fixtures shared by the integration tests.

use hlpath::{GlyphBox, LayoutSnapshot, LineFragment, Rect};

/// One line per rect, each holding a single glyph that spans the rect.
pub fn stacked(rects: &[Rect]) -> LayoutSnapshot {
    LayoutSnapshot::new(
        rects
            .iter()
            .enumerate()
            .map(|(i, rect)| LineFragment {
                index: i,
                bounds: *rect,
                glyph_range: i..i + 1,
                glyphs: vec![GlyphBox::new(rect.left(), rect.width())],
            })
            .collect(),
    )
}
