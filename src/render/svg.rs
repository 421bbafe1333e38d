//! SVG generation
//!
//! [`SvgSurface`] is a [`FillSurface`] that records every fill as a `<path>`
//! element, one `<g>` per highlighted range, and serializes the document with
//! `facet_xml`.

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{Group, Path, SVG_NS, Svg, SvgNode, facet_xml, fmt_num};

use crate::errors::RenderError;
use crate::log::debug;
use crate::render::geometry::{Contour, RoundedPath};
use crate::render::surface::{FillRule, FillSurface};
use crate::types::{Color, Rect};

/// Collects filled contours into an SVG document.
#[derive(Debug, Default)]
pub struct SvgSurface {
    children: Vec<SvgNode>,
    open: Option<Group>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `<path>` elements recorded so far.
    pub fn path_count(&self) -> usize {
        let count = |nodes: &[SvgNode]| {
            nodes
                .iter()
                .map(|n| match n {
                    SvgNode::G(g) => g.children.len(),
                    SvgNode::Path(_) => 1,
                })
                .sum::<usize>()
        };
        count(&self.children) + self.open.as_ref().map_or(0, |g| g.children.len())
    }

    /// Serialize the document, showing the `view_box` region of the plane.
    pub fn finish(mut self, view_box: Rect) -> Result<String, RenderError> {
        let (width, height) = (view_box.width(), view_box.height());
        let finite = [view_box.left(), view_box.top(), width, height]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(RenderError::InvalidCanvas { width, height });
        }
        if let Some(group) = self.open.take() {
            self.children.push(SvgNode::G(group));
        }

        debug!(paths = self.path_count(), %view_box, "serializing svg");

        let svg = Svg {
            xmlns: Some(SVG_NS.to_string()),
            width: Some(fmt_num(width)),
            height: Some(fmt_num(height)),
            view_box: Some(format!(
                "{} {} {} {}",
                fmt_num(view_box.left()),
                fmt_num(view_box.top()),
                fmt_num(width),
                fmt_num(height)
            )),
            children: self.children,
        };

        fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
            write!(writer, "{}", fmt_num(value))
        }

        let options = SerializeOptions {
            float_formatter: Some(format_float),
            preserve_entities: true,
            ..Default::default()
        };
        facet_xml::to_string_with_options(&svg, &options).map_err(|e| RenderError::SvgSerialize {
            message: e.to_string(),
        })
    }
}

impl FillSurface for SvgSurface {
    fn begin_path(&mut self, path: &RoundedPath) {
        if let Some(group) = self.open.take() {
            self.children.push(SvgNode::G(group));
        }
        self.open = Some(Group {
            id: Some(format!("highlight-{}", path.range_id.0)),
            class: Some("highlight".to_string()),
            children: Vec::new(),
        });
    }

    fn fill_contour(&mut self, contour: &Contour, color: Color, rule: FillRule) {
        if contour.is_empty() {
            return;
        }
        let node = SvgNode::Path(path_element(contour, color, rule));
        match self.open.as_mut() {
            Some(group) => group.children.push(node),
            None => self.children.push(node),
        }
    }

    fn end_path(&mut self, _path: &RoundedPath) {
        if let Some(group) = self.open.take() {
            self.children.push(SvgNode::G(group));
        }
    }
}

fn path_element(contour: &Contour, color: Color, rule: FillRule) -> Path {
    Path {
        d: Some(contour.to_path_data().to_string()),
        fill: Some(color.to_rgb_string()),
        fill_opacity: (!color.is_opaque()).then(|| fmt_num(color.opacity())),
        fill_rule: Some(rule.as_svg().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RangeId;
    use crate::render::surface::render_paths;

    fn square(range: u32, color: Color) -> RoundedPath {
        RoundedPath {
            range_id: RangeId(range),
            color,
            contours: vec![Contour::rect(Rect::new(0.0, 0.0, 10.0, 10.0))],
        }
    }

    #[test]
    fn path_elements_carry_fill() {
        let path = path_element(
            &Contour::rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Color::rgba(255, 0, 0, 128),
            FillRule::NonZero,
        );
        assert_eq!(path.d.as_deref(), Some("M0 0 L10 0 L10 10 L0 10 L0 0 Z"));
        assert_eq!(path.fill.as_deref(), Some("rgb(255,0,0)"));
        assert_eq!(path.fill_opacity.as_deref(), Some("0.5019607843"));
        assert_eq!(path.fill_rule.as_deref(), Some("nonzero"));

        let opaque = path_element(
            &Contour::rect(Rect::new(0.0, 0.0, 1.0, 1.0)),
            Color::YELLOW,
            FillRule::EvenOdd,
        );
        assert!(opaque.fill_opacity.is_none());
    }

    #[test]
    fn one_group_per_range() {
        let mut surface = SvgSurface::new();
        render_paths(
            &[square(0, Color::YELLOW), square(3, Color::WHITE)],
            &mut surface,
            FillRule::NonZero,
        );
        assert_eq!(surface.path_count(), 2);
        assert_eq!(surface.children.len(), 2);
        match &surface.children[1] {
            SvgNode::G(group) => assert_eq!(group.id.as_deref(), Some("highlight-3")),
            other => panic!("expected a group, got {other:?}"),
        }
    }

    #[test]
    fn document_contains_paths() {
        let mut surface = SvgSurface::new();
        render_paths(&[square(0, Color::YELLOW)], &mut surface, FillRule::NonZero);
        let svg = surface.finish(Rect::new(-4.0, 0.0, 100.0, 50.0)).unwrap();
        assert!(svg.contains("M0 0 L10 0 L10 10 L0 10 L0 0 Z"));
        assert!(svg.contains("rgb(255,255,0)"));
        assert!(svg.contains("-4 0 100 50"));
    }

    #[test]
    fn invalid_canvas_is_rejected() {
        let surface = SvgSurface::new();
        assert!(matches!(
            surface.finish(Rect::new(f64::NAN, 0.0, 10.0, 10.0)),
            Err(RenderError::InvalidCanvas { .. })
        ));
    }
}
