//! Length values: Scalar, Unit (px, %, vw, vh, auto), and four-sided ScalarBox.

use std::fmt;

/// A length unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    /// Device-independent pixels.
    Px,
    /// Percentage of the parent dimension.
    Percent,
    /// Viewport width percentage.
    Vw,
    /// Viewport height percentage.
    Vh,
    /// Content-sized.
    Auto,
}

/// A length with a unit, e.g. `16px`, `100%`, `80vh`, `auto`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    pub value: f32,
    pub unit: Unit,
}

impl Scalar {
    pub const ZERO: Scalar = Scalar {
        value: 0.0,
        unit: Unit::Px,
    };

    pub fn px(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn percent(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    pub fn vw(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Vw,
        }
    }

    pub fn vh(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Vh,
        }
    }

    pub fn auto() -> Self {
        Self {
            value: 0.0,
            unit: Unit::Auto,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }
}

impl From<u16> for Scalar {
    fn from(px: u16) -> Self {
        Scalar::px(f32::from(px))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            Unit::Auto => return f.write_str("auto"),
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
        };
        if self.value.fract() == 0.0 {
            write!(f, "{}{suffix}", self.value as i64)
        } else {
            write!(f, "{}{suffix}", self.value)
        }
    }
}

/// Four-sided lengths (top, right, bottom, left) for margin and padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarBox {
    pub top: Scalar,
    pub right: Scalar,
    pub bottom: Scalar,
    pub left: Scalar,
}

impl ScalarBox {
    pub fn all(v: Scalar) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn symmetric(vertical: Scalar, horizontal: Scalar) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn new(top: Scalar, right: Scalar, bottom: Scalar, left: Scalar) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Only the top side set; the rest are zero.
    pub fn top(v: Scalar) -> Self {
        Self::new(v, Scalar::ZERO, Scalar::ZERO, Scalar::ZERO)
    }

    /// Only the bottom side set; the rest are zero.
    pub fn bottom(v: Scalar) -> Self {
        Self::new(Scalar::ZERO, Scalar::ZERO, v, Scalar::ZERO)
    }

    /// Only the left side set; the rest are zero.
    pub fn left(v: Scalar) -> Self {
        Self::new(Scalar::ZERO, Scalar::ZERO, Scalar::ZERO, v)
    }
}

impl fmt::Display for ScalarBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top == self.bottom && self.left == self.right {
            if self.top == self.left {
                return write!(f, "{}", self.top);
            }
            return write!(f, "{} {}", self.top, self.left);
        }
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_units() {
        assert_eq!(Scalar::px(16.0).to_string(), "16px");
        assert_eq!(Scalar::px(1.5).to_string(), "1.5px");
        assert_eq!(Scalar::percent(100.0).to_string(), "100%");
        assert_eq!(Scalar::vh(80.0).to_string(), "80vh");
        assert_eq!(Scalar::vw(50.0).to_string(), "50vw");
        assert_eq!(Scalar::auto().to_string(), "auto");
    }

    #[test]
    fn from_u16_is_px() {
        assert_eq!(Scalar::from(24u16), Scalar::px(24.0));
        assert!(!Scalar::from(0u16).is_auto());
    }

    #[test]
    fn box_shorthand_display() {
        assert_eq!(ScalarBox::all(Scalar::px(8.0)).to_string(), "8px");
        assert_eq!(
            ScalarBox::symmetric(Scalar::ZERO, Scalar::auto()).to_string(),
            "0px auto"
        );
        assert_eq!(ScalarBox::top(Scalar::px(24.0)).to_string(), "24px 0px 0px 0px");
    }

    #[test]
    fn one_sided_boxes() {
        let b = ScalarBox::left(Scalar::px(8.0));
        assert_eq!(b.left, Scalar::px(8.0));
        assert_eq!(b.top, Scalar::ZERO);
        let b = ScalarBox::bottom(Scalar::px(4.0));
        assert_eq!(b.bottom, Scalar::px(4.0));
        assert_eq!(b.right, Scalar::ZERO);
    }
}
