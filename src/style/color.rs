//! Concrete paint values: Rgba, Paint (solid or gradient), Shadow, Border.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::hex(0xFFFFFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 0xFF,
        }
    }

    /// Color with a fractional alpha in `0.0..=1.0`.
    pub fn with_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA`, or `transparent`.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            field: "color".into(),
            message: format!("expected #RRGGBB, #RRGGBBAA or transparent, got {input:?}"),
        };
        if input.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let a = if digits.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            0 => f.write_str("transparent"),
            0xFF => write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
            a => write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, a
            ),
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgba::parse(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// A linear gradient between two colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub angle_deg: f32,
    pub from: Rgba,
    pub to: Rgba,
}

/// A fill: either a solid color or a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Gradient(LinearGradient),
}

impl Paint {
    pub fn is_transparent(&self) -> bool {
        matches!(self, Paint::Solid(c) if c.is_transparent())
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Solid(c) => write!(f, "{c}"),
            Paint::Gradient(g) => {
                write!(f, "linear-gradient({}deg, {}, {})", g.angle_deg, g.from, g.to)
            }
        }
    }
}

/// A drop shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset_x: i16,
    pub offset_y: i16,
    pub blur: u16,
    pub color: Rgba,
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.offset_x, self.offset_y, self.blur, self.color
        )
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    None,
    Solid,
    Dashed,
}

/// Which sides a border is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSides {
    All,
    Left,
}

/// A border with width, style, color, and sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub kind: BorderKind,
    pub width: u16,
    pub color: Rgba,
    pub sides: BorderSides,
}

impl Border {
    pub const NONE: Border = Border {
        kind: BorderKind::None,
        width: 0,
        color: Rgba::TRANSPARENT,
        sides: BorderSides::All,
    };

    pub fn solid(width: u16, color: Rgba) -> Self {
        Self {
            kind: BorderKind::Solid,
            width,
            color,
            sides: BorderSides::All,
        }
    }

    pub fn dashed(width: u16, color: Rgba) -> Self {
        Self {
            kind: BorderKind::Dashed,
            width,
            color,
            sides: BorderSides::All,
        }
    }

    /// Restrict to the left edge (builder).
    pub fn left_only(mut self) -> Self {
        self.sides = BorderSides::Left;
        self
    }
}
