//! Module implementing the `Color` type.

use std::fmt;

use image::Rgba;


/// RGBA color of the text or its outline.
///
/// Colors are usually opaque, but a partially transparent one
/// will be blended accordingly when the text is composited onto the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// Create an opaque color from its RGB channels.
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 0xff)
    }

    /// Create a white color.
    #[inline]
    pub fn white() -> Self {
        Self::gray(0xff)
    }

    /// Create a black color.
    #[inline]
    pub fn black() -> Self {
        Self::gray(0x00)
    }

    /// Create a gray color of given intensity.
    #[inline]
    pub fn gray(value: u8) -> Self {
        Color::rgb(value, value, value)
    }

    /// Create a fully transparent color.
    #[inline]
    pub fn transparent() -> Self {
        Color(0, 0, 0, 0)
    }
}

impl Color {
    /// Alpha channel of the color.
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.3
    }

    /// Whether the color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.3 == 0xff
    }

    #[inline]
    pub(crate) fn to_rgba(&self) -> Rgba<u8> {
        let &Color(r, g, b, a) = self;
        Rgba([r, g, b, a])
    }
}

impl From<Color> for Rgba<u8> {
    #[inline]
    fn from(color: Color) -> Rgba<u8> {
        color.to_rgba()
    }
}

impl From<Rgba<u8>> for Color {
    #[inline]
    fn from(rgba: Rgba<u8>) -> Color {
        let Rgba([r, g, b, a]) = rgba;
        Color(r, g, b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let &Color(r, g, b, a) = self;
        write!(fmt, "#{:0>2x}{:0>2x}{:0>2x}", r, g, b)?;
        if a != 0xff {
            write!(fmt, "{:0>2x}", a)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use image::Rgba;
    use super::Color;

    #[test]
    fn display_hex() {
        assert_eq!("#ffffff", Color::white().to_string());
        assert_eq!("#0a0b0c", Color::rgb(10, 11, 12).to_string());
        assert_eq!("#00000000", Color::transparent().to_string());
    }

    #[test]
    fn rgba_conversion() {
        let color = Color(1, 2, 3, 4);
        assert_eq!(Rgba([1, 2, 3, 4]), Rgba::from(color));
        assert_eq!(color, Color::from(Rgba([1, 2, 3, 4])));
        assert!(Color::white().is_opaque());
        assert_eq!(0, Color::transparent().alpha());
    }
}
