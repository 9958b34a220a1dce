//! Screen document model: serde types for the wire format plus lenient loading.

pub mod cta;
pub mod load;
pub mod screen;
pub mod section;
pub mod text;
pub mod tokens;

pub use cta::{ActionKind, CtaAction, CtaConfig, CtaKind, CtaPriority, CtaSize, NavigationMethod};
pub use load::{load_lenient, LenientLoad};
pub use screen::{ScreenConfig, ScreenTheme};
pub use section::{
    ImageSection, Platform, Section, SectionAlign, SectionBase, SectionType, SectionWidth,
    TextSection, VisibilityConfig,
};
pub use text::{TextAlignment, TextBlock, TextStyle, TextTransform, TextWeight};
pub use tokens::{
    AccentToken, BackgroundToken, ColorScheme, LayoutType, SpacingToken, TextColorToken,
    TextVariant,
};
