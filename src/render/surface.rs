//! Drawing surface abstraction.
//!
//! The pipeline stops at [`RoundedPath`] values; a [`FillSurface`] is whatever
//! the host draws with. Contours never overlap or self-intersect, so either
//! fill rule gives the same result.

use crate::render::geometry::{Contour, RoundedPath};
use crate::types::Color;

/// Winding rule requested for a fill
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FillRule {
    /// Value of the SVG `fill-rule` attribute
    pub fn as_svg(self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

/// A host drawing primitive that can fill closed contours.
pub trait FillSurface {
    /// Called before the contours of one highlighted range.
    fn begin_path(&mut self, _path: &RoundedPath) {}

    fn fill_contour(&mut self, contour: &Contour, color: Color, rule: FillRule);

    /// Called after the contours of one highlighted range.
    fn end_path(&mut self, _path: &RoundedPath) {}
}

/// Fill every contour of every path with the path's color.
pub fn render_paths<S: FillSurface + ?Sized>(paths: &[RoundedPath], surface: &mut S, rule: FillRule) {
    for path in paths {
        surface.begin_path(path);
        for contour in &path.contours {
            surface.fill_contour(contour, path.color, rule);
        }
        surface.end_path(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RangeId;
    use crate::types::Rect;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl FillSurface for Recorder {
        fn begin_path(&mut self, path: &RoundedPath) {
            self.calls.push(format!("begin {}", path.range_id.0));
        }

        fn fill_contour(&mut self, contour: &Contour, color: Color, rule: FillRule) {
            self.calls
                .push(format!("fill {} {} {}", contour.area(), color, rule.as_svg()));
        }

        fn end_path(&mut self, path: &RoundedPath) {
            self.calls.push(format!("end {}", path.range_id.0));
        }
    }

    #[test]
    fn fills_each_contour_in_order() {
        let paths = vec![
            RoundedPath {
                range_id: RangeId(0),
                color: Color::YELLOW,
                contours: vec![
                    Contour::rect(Rect::new(0.0, 0.0, 2.0, 2.0)),
                    Contour::rect(Rect::new(0.0, 10.0, 3.0, 1.0)),
                ],
            },
            RoundedPath {
                range_id: RangeId(1),
                color: Color::rgb(255, 0, 0),
                contours: vec![Contour::rect(Rect::new(5.0, 5.0, 1.0, 1.0))],
            },
        ];
        let mut recorder = Recorder::default();
        render_paths(&paths, &mut recorder, FillRule::EvenOdd);
        assert_eq!(
            recorder.calls,
            vec![
                "begin 0",
                "fill 4 #ffff00 evenodd",
                "fill 3 #ffff00 evenodd",
                "end 0",
                "begin 1",
                "fill 1 #ff0000 evenodd",
                "end 1",
            ]
        );
    }
}
