//! Visual style: typed properties, cascade, concrete values, and token tables.

pub mod color;
pub mod cta;
pub mod scalar;
pub mod styles;
pub mod tokens;

pub use color::{Border, BorderKind, BorderSides, LinearGradient, Paint, Rgba, Shadow};
pub use cta::{cta_styles, LinkColorPolicy};
pub use scalar::{Scalar, ScalarBox, Unit};
pub use styles::{
    resolve_style, AlignItems, Axis, FontFamily, Justify, Styles, TextAlign, TextDecoration,
};
pub use tokens::{parse_token, ResolvedTheme, TokenResolver, Typography};
