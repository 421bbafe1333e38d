//! Parser for string-typed property values (lengths and colors).
//!
//! Hosts that bridge from a declarative UI layer hand every property over as a
//! string. The grammar lives in `props.pest`.

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::ConfigError;
use crate::types::Color;

#[derive(Parser)]
#[grammar = "props.pest"]
struct PropParser;

/// Parse a length such as `4`, `2.5` or `3px`.
pub fn parse_length(prop: &str, value: &str) -> Result<f64, ConfigError> {
    let mut pairs = PropParser::parse(Rule::length_value, value).map_err(|e| {
        ConfigError::InvalidLength {
            prop: prop.to_string(),
            src: named(prop, value),
            span: pest_span(&e, value),
        }
    })?;

    let number = pairs
        .next()
        .into_iter()
        .flat_map(|root| root.into_inner())
        .find(|p| p.as_rule() == Rule::number)
        .ok_or_else(|| ConfigError::InvalidLength {
            prop: prop.to_string(),
            src: named(prop, value),
            span: (0, value.len()).into(),
        })?;

    let parsed: f64 = number
        .as_str()
        .parse()
        .map_err(|_| ConfigError::InvalidLength {
            prop: prop.to_string(),
            src: named(prop, value),
            span: pair_span(&number),
        })?;

    if !parsed.is_finite() {
        return Err(ConfigError::NonFinite {
            prop: prop.to_string(),
        });
    }
    Ok(parsed)
}

/// Parse a color such as `#ff0`, `#FFFF00`, `rgba(255,255,0,0.5)` or `yellow`.
pub fn parse_color(prop: &str, value: &str) -> Result<Color, ConfigError> {
    let mut pairs = PropParser::parse(Rule::color_value, value).map_err(|e| {
        ConfigError::InvalidColor {
            prop: prop.to_string(),
            src: named(prop, value),
            span: pest_span(&e, value),
        }
    })?;

    let invalid = |span: SourceSpan| ConfigError::InvalidColor {
        prop: prop.to_string(),
        src: named(prop, value),
        span,
    };

    let body = pairs
        .next()
        .into_iter()
        .flat_map(|root| root.into_inner())
        .find(|p| p.as_rule() != Rule::EOI)
        .ok_or_else(|| invalid((0, value.len()).into()))?;

    match body.as_rule() {
        Rule::hex_color => parse_hex(body.as_str()).ok_or_else(|| invalid(pair_span(&body))),
        Rule::rgb | Rule::rgba => {
            let mut channels = [0u8; 3];
            let mut alpha = 255u8;
            let mut idx = 0;
            for part in body.clone().into_inner() {
                match part.as_rule() {
                    Rule::channel => {
                        let c: u8 = part.as_str().parse().map_err(|_| invalid(pair_span(&part)))?;
                        if let Some(slot) = channels.get_mut(idx) {
                            *slot = c;
                        }
                        idx += 1;
                    }
                    Rule::alpha => {
                        let a: f64 = part.as_str().parse().map_err(|_| invalid(pair_span(&part)))?;
                        if !(0.0..=1.0).contains(&a) {
                            return Err(invalid(pair_span(&part)));
                        }
                        alpha = (a * 255.0).round() as u8;
                    }
                    _ => {}
                }
            }
            Ok(Color::rgba(channels[0], channels[1], channels[2], alpha))
        }
        Rule::name => Color::from_name(body.as_str()).ok_or_else(|| ConfigError::UnknownColorName {
            name: body.as_str().to_string(),
            src: named(prop, value),
            span: pair_span(&body),
        }),
        _ => Err(invalid(pair_span(&body))),
    }
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
fn parse_hex(token: &str) -> Option<Color> {
    let hex = token.strip_prefix('#')?;
    let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
        4 => Some(Color::rgba(
            nibble(0)? * 17,
            nibble(1)? * 17,
            nibble(2)? * 17,
            nibble(3)? * 17,
        )),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn named(prop: &str, value: &str) -> NamedSource<String> {
    NamedSource::new(prop, value.to_string())
}

fn pair_span(pair: &Pair<'_, Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}

fn pest_span(err: &pest::error::Error<Rule>, value: &str) -> SourceSpan {
    match err.location {
        pest::error::InputLocation::Pos(p) => (p, usize::from(p < value.len())).into(),
        pest::error::InputLocation::Span((start, end)) => (start, end - start).into(),
    }
}
