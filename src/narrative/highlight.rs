use lazy_static::lazy_static;
use std::collections::HashMap;

/// A solid color used for a highlight background.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default highlight color: subtle white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// Resolved color of a highlight span.
///
/// `Class` carries a styling-framework utility class verbatim; it is opaque
/// here and interpreted by whatever renders the span.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum HighlightColor {
    Rgb(Rgb),
    Class(String),
}

impl Default for HighlightColor {
    fn default() -> Self {
        HighlightColor::Rgb(Rgb::WHITE)
    }
}

/// Parsed form of a `==...==` span.
#[derive(Debug, PartialEq, Clone)]
pub struct HighlightSpec {
    pub text: String,
    pub color: HighlightColor,
}

lazy_static! {
    /// Named color table. Values track the 500-weight palette the narrative
    /// styling was tuned against.
    static ref NAMED_COLORS: HashMap<&'static str, Rgb> = {
        let mut m = HashMap::new();
        m.insert("red", Rgb::new(239, 68, 68));
        m.insert("blue", Rgb::new(59, 130, 246));
        m.insert("green", Rgb::new(34, 197, 94));
        m.insert("yellow", Rgb::new(234, 179, 8));
        m.insert("purple", Rgb::new(168, 85, 247));
        m.insert("pink", Rgb::new(236, 72, 153));
        m.insert("orange", Rgb::new(249, 115, 22));
        m.insert("cyan", Rgb::new(6, 182, 212));
        m.insert("indigo", Rgb::new(99, 102, 241));
        m.insert("teal", Rgb::new(20, 184, 166));
        m.insert("lime", Rgb::new(132, 204, 22));
        m.insert("amber", Rgb::new(245, 158, 11));
        m.insert("emerald", Rgb::new(16, 185, 129));
        m.insert("violet", Rgb::new(139, 92, 246));
        m.insert("fuchsia", Rgb::new(217, 70, 239));
        m.insert("rose", Rgb::new(244, 63, 94));
        m.insert("sky", Rgb::new(14, 165, 233));
        m.insert("default", Rgb::WHITE);
        m.insert("white", Rgb::WHITE);
        m
    };
}

/// Look up a named color, case-insensitively.
pub fn named_color(name: &str) -> Option<Rgb> {
    NAMED_COLORS.get(name.to_lowercase().as_str()).copied()
}

/// Parse the inside of a `==colorSpec:text==` or `==text==` span.
///
/// Total: every malformed input degrades to a defined fallback rather than
/// failing. Color specifiers may be a `#`-prefixed 3- or 6-digit hex value,
/// a `bg-` utility class passed through verbatim, or a named color.
pub fn parse_highlight(raw: &str) -> HighlightSpec {
    let inner = raw.strip_prefix("==").unwrap_or(raw);
    let inner = inner.strip_suffix("==").unwrap_or(inner);
    let inner = inner.trim();

    let Some(colon) = inner.find(':') else {
        return HighlightSpec {
            text: inner.to_string(),
            color: HighlightColor::default(),
        };
    };

    let color_part = inner[..colon].trim();
    let text_part = inner[colon + 1..].trim();

    if let Some(hex) = color_part.strip_prefix('#') {
        return match decode_hex(hex) {
            Some(rgb) => HighlightSpec {
                text: text_part.to_string(),
                color: HighlightColor::Rgb(rgb),
            },
            None => HighlightSpec {
                text: if text_part.is_empty() {
                    inner.to_string()
                } else {
                    text_part.to_string()
                },
                color: HighlightColor::default(),
            },
        };
    }

    if color_part.starts_with("bg-") {
        return HighlightSpec {
            text: text_part.to_string(),
            color: HighlightColor::Class(color_part.to_string()),
        };
    }

    HighlightSpec {
        text: text_part.to_string(),
        color: HighlightColor::Rgb(named_color(color_part).unwrap_or(Rgb::WHITE)),
    }
}

/// Decode a 3-digit (`f00`) or 6-digit (`ff0000`) hex triple.
fn decode_hex(hex: &str) -> Option<Rgb> {
    let digits: Vec<char> = hex.chars().collect();
    match digits.len() {
        3 => {
            let r = hex_pair(digits[0], digits[0])?;
            let g = hex_pair(digits[1], digits[1])?;
            let b = hex_pair(digits[2], digits[2])?;
            Some(Rgb::new(r, g, b))
        }
        6 => {
            let r = hex_pair(digits[0], digits[1])?;
            let g = hex_pair(digits[2], digits[3])?;
            let b = hex_pair(digits[4], digits[5])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

fn hex_pair(hi: char, lo: char) -> Option<u8> {
    let hi = hi.to_digit(16)? as u8;
    let lo = lo.to_digit(16)? as u8;
    Some(hi * 16 + lo)
}
