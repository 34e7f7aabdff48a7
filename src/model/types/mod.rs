//! Module defining the model types.

mod align;
mod color;
mod layout;

pub use self::align::{AlignParseError, HAlign, VAlign};
pub use self::color::Color;
pub use self::layout::{LayoutConfig,
                       LayoutConfigBuilder,
                       Error as LayoutConfigError,
                       Padding,
                       TextBlock};
