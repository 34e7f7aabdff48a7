//! Deserializers for data model types.

mod align;
mod color;

pub use self::color::ColorParseError;
