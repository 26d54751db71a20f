use gpui::{AbsoluteLength, DefiniteLength, FontWeight, Rgba, SharedString, px, relative, rems};
use smallvec::SmallVec;

use crate::Token;

/// A parsed `var(--name)` or `var(--name, fallback)` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarReference<'a> {
    /// `None` when the name is not a known token.
    pub token: Option<Token>,
    pub fallback: Option<&'a str>,
}

/// Parses a `var(...)` value. The fallback is everything after the first comma.
pub fn parse_var(value: &str) -> Option<VarReference<'_>> {
    let inner = value.trim().strip_prefix("var(")?.strip_suffix(')')?;

    let (name, fallback) = match inner.split_once(',') {
        Some((name, fallback)) => (name, Some(fallback.trim()).filter(|f| !f.is_empty())),
        None => (inner, None),
    };

    Some(VarReference {
        token: name.trim().parse().ok(),
        fallback,
    })
}

/// Returns the token named by a `var(--ds-...)` reference.
pub fn var_reference(value: &str) -> Option<Token> {
    parse_var(value)?.token
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` into a color.
pub fn parse_color(value: &str) -> Option<Rgba> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| -> Option<f32> {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|byte| byte as f32 / 255.)
    };

    match hex.len() {
        3 => {
            let short = |i: usize| -> Option<f32> {
                let digit = u8::from_str_radix(&hex[i..i + 1], 16).ok()?;
                Some((digit * 17) as f32 / 255.)
            };
            Some(Rgba {
                r: short(0)?,
                g: short(1)?,
                b: short(2)?,
                a: 1.,
            })
        }
        6 => Some(Rgba {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: 1.,
        }),
        8 => Some(Rgba {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: channel(6..8)?,
        }),
        _ => None,
    }
}

/// Parses a length ending in `px` or `rem`. Bare numbers are pixels.
pub fn parse_abs_length(value: &str) -> Option<AbsoluteLength> {
    let value = value.trim();

    if let Some(value) = value.strip_suffix("rem")
        && let Ok(value) = value.trim().parse::<f32>()
    {
        return Some(AbsoluteLength::Rems(rems(value)));
    } else if let Some(value) = value.strip_suffix("px")
        && let Ok(value) = value.trim().parse::<f32>()
    {
        return Some(AbsoluteLength::Pixels(px(value)));
    }

    value
        .parse::<f32>()
        .ok()
        .map(|value| AbsoluteLength::Pixels(px(value)))
}

/// Bare numbers are a multiple of the font size, anything else an absolute length.
pub fn parse_line_height(value: &str) -> Option<DefiniteLength> {
    match value.trim().parse::<f32>() {
        Ok(factor) => Some(relative(factor)),
        Err(_) => parse_abs_length(value).map(DefiniteLength::Absolute),
    }
}

/// Splits a comma separated font stack. Quotes around family names are dropped.
pub fn parse_font_family(value: &str) -> SmallVec<[SharedString; 1]> {
    value
        .split(',')
        .map(|family| family.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|family| !family.is_empty())
        .map(|family| SharedString::from(family.to_string()))
        .collect()
}

pub fn parse_font_weight(value: &str) -> Option<FontWeight> {
    value.trim().parse::<f32>().ok().map(FontWeight)
}
