//! Facet-derived types for SVG serialization of filled highlight paths.
//!
//! This crate provides the small slice of the SVG DOM that highlight rendering
//! needs (a root `<svg>`, groups and `<path>` elements), serialized with
//! `facet-xml`, plus a fluent [`PathData`] builder for the `d` attribute.
//!
//! # Example
//!
//! ```rust
//! use facet_svg::PathData;
//!
//! let d = PathData::new().m(0.0, 0.0).l(10.0, 0.0).l(10.0, 5.0).z();
//! assert_eq!(d.to_string(), "M0 0 L10 0 L10 5 Z");
//! ```

use std::fmt;

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any SVG node a highlight document contains
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "path")]
    Path(Path),
}

/// SVG group element (`<g>`), one per highlighted range
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Group {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute, rename = "fill-rule")]
    pub fill_rule: Option<String>,
}

/// One command of a path's `d` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// Fluent builder for SVG path data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// `M x y`
    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    /// `L x y`
    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    /// `A rx ry rotation large-arc sweep x y`
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    /// `Z`
    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCommand::MoveTo { x, y } => write!(f, "M{} {}", fmt_num(x), fmt_num(y))?,
                PathCommand::LineTo { x, y } => write!(f, "L{} {}", fmt_num(x), fmt_num(y))?,
                PathCommand::Arc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => write!(
                    f,
                    "A{} {} {} {} {} {} {}",
                    fmt_num(rx),
                    fmt_num(ry),
                    fmt_num(x_axis_rotation),
                    u8::from(large_arc),
                    u8::from(sweep),
                    fmt_num(x),
                    fmt_num(y)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Format a number with at most 10 decimals and no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.10}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    // Tiny negatives round to "-0"
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

// Re-export facet_xml for convenience
pub use facet_xml;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(6.0), "6");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-3.6e-16), "0");
        assert_eq!(fmt_num(93.999_999_999_999_99), "94");
    }

    #[test]
    fn path_data_display() {
        let d = PathData::new()
            .m(0.0, 6.0)
            .a(6.0, 6.0, 0.0, false, true, 6.0, 0.0)
            .l(10.0, 0.0)
            .z();
        assert_eq!(d.to_string(), "M0 6 A6 6 0 0 1 6 0 L10 0 Z");
    }
}
