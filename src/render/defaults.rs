//! Default settings and geometric tolerances

use crate::types::Color;

pub const BACKGROUND_COLOR: Color = Color::YELLOW;
pub const PADDING: f64 = 4.0;
pub const CORNER_RADIUS: f64 = 4.0;

/// Edges closer than this are treated as aligned.
pub const EPSILON: f64 = 1e-6;
