//! Geometry and color primitives shared by every pipeline stage.
//!
//! Coordinates are host drawing units (points or logical pixels) with the Y
//! axis pointing down, as every text layout engine reports them.

use std::fmt;

use glam::{DVec2, dvec2};

/// Treat NaN and anything at or below zero as zero.
#[inline]
pub fn clamp_non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Create a rect from origin and size. Negative sizes collapse to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            min: dvec2(x, y),
            max: dvec2(x + clamp_non_negative(width), y + clamp_non_negative(height)),
        }
    }

    /// Create a rect from two corners in any order.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Rect {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when the rect covers no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Smallest rect containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow each side outward. Negative amounts are ignored.
    pub fn inflate(&self, sides: Sides) -> Rect {
        let sides = sides.clamped();
        Rect {
            min: dvec2(self.min.x - sides.left, self.min.y - sides.top),
            max: dvec2(self.max.x + sides.right, self.max.y + sides.bottom),
        }
    }

    /// Shrink each side inward. Negative amounts are ignored and an axis that
    /// would invert collapses to its midpoint.
    pub fn deflate(&self, sides: Sides) -> Rect {
        let sides = sides.clamped();
        let (x0, x1) = shrink_axis(self.min.x, self.max.x, sides.left, sides.right);
        let (y0, y1) = shrink_axis(self.min.y, self.max.y, sides.top, sides.bottom);
        Rect {
            min: dvec2(x0, y0),
            max: dvec2(x1, y1),
        }
    }

    /// Length of the horizontal overlap with another rect (zero if disjoint).
    pub fn horizontal_overlap(&self, other: &Rect) -> f64 {
        clamp_non_negative(self.right().min(other.right()) - self.left().max(other.left()))
    }
}

fn shrink_axis(lo: f64, hi: f64, a: f64, b: f64) -> (f64, f64) {
    let (lo2, hi2) = (lo + a, hi - b);
    if hi2 < lo2 {
        let mid = (lo2 + hi2) / 2.0;
        (mid, mid)
    } else {
        (lo2, hi2)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}x{})",
            self.min.x,
            self.min.y,
            self.width(),
            self.height()
        )
    }
}

/// Per-side amounts (padding or insets)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Sides {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Sides {
    pub const ZERO: Sides = Sides {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Sides {
            left,
            right,
            top,
            bottom,
        }
    }

    pub const fn uniform(v: f64) -> Self {
        Sides::new(v, v, v, v)
    }

    /// Copy with every side clamped to be non-negative.
    pub fn clamped(self) -> Self {
        Sides {
            left: clamp_non_negative(self.left),
            right: clamp_non_negative(self.right),
            top: clamp_non_negative(self.top),
            bottom: clamp_non_negative(self.bottom),
        }
    }
}

/// RGBA fill color, 8 bits per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Look up a CSS-style color name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::rgb(255, 0, 0),
            "green" => Color::rgb(0, 128, 0),
            "blue" => Color::rgb(0, 0, 255),
            "yellow" => Color::YELLOW,
            "cyan" => Color::rgb(0, 255, 255),
            "magenta" => Color::rgb(255, 0, 255),
            "orange" => Color::rgb(255, 165, 0),
            "purple" => Color::rgb(128, 0, 128),
            "pink" => Color::rgb(255, 192, 203),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
            "transparent" => Color::TRANSPARENT,
            _ => return None,
        };
        Some(color)
    }

    /// Alpha as a fraction in `0.0..=1.0`
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// `rgb(r,g,b)` form, ignoring alpha
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}
