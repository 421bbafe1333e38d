//! Error types with rich diagnostics using miette
//!
//! The geometry pipeline is total and never fails. Errors only come from the
//! string-typed property surface and from serializing SVG output.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while turning component properties into a [`crate::Config`]
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("invalid length for `{prop}`")]
    #[diagnostic(
        code(hlpath::config::invalid_length),
        help("lengths are plain numbers with an optional `px` suffix, e.g. `4` or `2.5px`")
    )]
    InvalidLength {
        prop: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a number here")]
        span: SourceSpan,
    },

    #[error("invalid color for `{prop}`")]
    #[diagnostic(
        code(hlpath::config::invalid_color),
        help("use `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`, `rgba(r,g,b,a)` or a color name")
    )]
    InvalidColor {
        prop: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a color")]
        span: SourceSpan,
    },

    #[error("unknown color name `{name}`")]
    #[diagnostic(code(hlpath::config::unknown_color))]
    UnknownColorName {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown name")]
        span: SourceSpan,
    },

    #[error("`{prop}` is not a finite number")]
    #[diagnostic(code(hlpath::config::non_finite))]
    NonFinite { prop: String },
}

impl ConfigError {
    /// Name of the property the error is about, if any.
    pub fn prop(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidLength { prop, .. }
            | ConfigError::InvalidColor { prop, .. }
            | ConfigError::NonFinite { prop } => Some(prop),
            ConfigError::UnknownColorName { .. } => None,
        }
    }
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while producing output for a drawing surface
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("XML serialization error: {message}")]
    #[diagnostic(code(hlpath::render::svg_serialize))]
    SvgSerialize { message: String },

    #[error("invalid canvas size {width}x{height}")]
    #[diagnostic(
        code(hlpath::render::invalid_canvas),
        help("the canvas must have a finite, non-negative width and height")
    )]
    InvalidCanvas { width: f64, height: f64 },
}
