//! Highlight configuration.
//!
//! A [`Config`] is an immutable value handed to every render pass. The host
//! component keeps its own mutable properties and builds a fresh value when
//! they change.

use crate::errors::ConfigError;
use crate::parse::{parse_color, parse_length};
use crate::render::defaults;
use crate::types::{Color, Sides, clamp_non_negative};

/// Visual settings shared by every highlighted range of one render pass
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub background_color: Color,
    /// Fallback for any side without its own padding
    pub padding: f64,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub corner_radius: f64,
    /// When positive, used instead of `corner_radius`
    pub highlight_border_radius: f64,
    /// Shrinks each line's box before padding is added
    pub background_insets: Sides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background_color: defaults::BACKGROUND_COLOR,
            padding: defaults::PADDING,
            padding_left: None,
            padding_right: None,
            padding_top: None,
            padding_bottom: None,
            corner_radius: defaults::CORNER_RADIUS,
            highlight_border_radius: 0.0,
            background_insets: Sides::ZERO,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the fallback padding and drop any per-side overrides.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self.padding_left = None;
        self.padding_right = None;
        self.padding_top = None;
        self.padding_bottom = None;
        self
    }

    pub fn with_padding_sides(mut self, sides: Sides) -> Self {
        self.padding_left = Some(sides.left);
        self.padding_right = Some(sides.right);
        self.padding_top = Some(sides.top);
        self.padding_bottom = Some(sides.bottom);
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_background_insets(mut self, insets: Sides) -> Self {
        self.background_insets = insets;
        self
    }

    /// Effective padding per side, never negative.
    pub fn resolved_padding(&self) -> Sides {
        Sides {
            left: self.padding_left.unwrap_or(self.padding),
            right: self.padding_right.unwrap_or(self.padding),
            top: self.padding_top.unwrap_or(self.padding),
            bottom: self.padding_bottom.unwrap_or(self.padding),
        }
        .clamped()
    }

    /// Effective corner radius, never negative.
    pub fn resolved_radius(&self) -> f64 {
        if self.highlight_border_radius > 0.0 {
            self.highlight_border_radius
        } else {
            clamp_non_negative(self.corner_radius)
        }
    }

    pub fn resolved_insets(&self) -> Sides {
        self.background_insets.clamped()
    }

    /// Build a config from the component's string properties.
    ///
    /// Unknown property names are skipped so the full prop bag of the host
    /// component can be passed straight through.
    pub fn from_props<'a>(
        props: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        for (name, value) in props {
            if !config.apply_prop(name, value)? {
                crate::log::debug!(name, "ignoring unknown highlight property");
            }
        }
        Ok(config)
    }

    /// Apply a single string property. Returns `false` for unknown names.
    pub fn apply_prop(&mut self, name: &str, value: &str) -> Result<bool, ConfigError> {
        match name {
            "color" | "backgroundColor" => self.background_color = parse_color(name, value)?,
            "padding" => self.padding = parse_length(name, value)?,
            "paddingLeft" => self.padding_left = Some(parse_length(name, value)?),
            "paddingRight" => self.padding_right = Some(parse_length(name, value)?),
            "paddingTop" => self.padding_top = Some(parse_length(name, value)?),
            "paddingBottom" => self.padding_bottom = Some(parse_length(name, value)?),
            "cornerRadius" => self.corner_radius = parse_length(name, value)?,
            "highlightBorderRadius" => self.highlight_border_radius = parse_length(name, value)?,
            "backgroundInsetTop" => self.background_insets.top = parse_length(name, value)?,
            "backgroundInsetBottom" => self.background_insets.bottom = parse_length(name, value)?,
            "backgroundInsetLeft" => self.background_insets.left = parse_length(name, value)?,
            "backgroundInsetRight" => self.background_insets.right = parse_length(name, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_padding_overrides_fallback() {
        let config = Config::from_props([("padding", "6"), ("paddingLeft", "2")]).unwrap();
        assert_eq!(config.resolved_padding(), Sides::new(2.0, 6.0, 6.0, 6.0));
    }

    #[test]
    fn negative_values_clamp_to_zero() {
        let config = Config::new()
            .with_padding(-3.0)
            .with_corner_radius(-1.0)
            .with_background_insets(Sides::uniform(-2.0));
        assert_eq!(config.resolved_padding(), Sides::ZERO);
        assert_eq!(config.resolved_radius(), 0.0);
        assert_eq!(config.resolved_insets(), Sides::ZERO);
    }

    #[test]
    fn highlight_border_radius_wins_when_positive() {
        let mut config = Config::new().with_corner_radius(4.0);
        assert_eq!(config.resolved_radius(), 4.0);
        config.highlight_border_radius = 9.0;
        assert_eq!(config.resolved_radius(), 9.0);
    }

    #[test]
    fn unknown_props_are_ignored() {
        let config = Config::from_props([
            ("text", "hello"),
            ("fontFamily", "serif"),
            ("color", "#00ff00"),
        ])
        .unwrap();
        assert_eq!(config.background_color, Color::rgb(0, 255, 0));
    }

    #[test]
    fn bad_values_report_the_property() {
        let err = Config::from_props([("cornerRadius", "round")]).unwrap_err();
        assert_eq!(err.prop(), Some("cornerRadius"));
    }
}
