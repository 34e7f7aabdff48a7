//! Module with the text measuring & drawing primitives.

use image::RgbaImage;

use crate::model::Color;


/// Bounding box of a piece of rendered text, in pixels.
///
/// Coordinates are relative to the point where the text is drawn at,
/// which is the top-left corner of its first line (at the font's ascent,
/// not at the top of the actual glyphs).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Move the box vertically by given amount of pixels.
    #[inline]
    pub fn shifted_down(self, dy: i32) -> Self {
        TextBox{top: self.top + dy, bottom: self.bottom + dy, ..self}
    }

    /// Smallest box that contains both this and the other one.
    #[inline]
    pub fn union(self, other: TextBox) -> Self {
        TextBox{
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}


/// Font-like object that can measure and draw lines of text.
///
/// Sizes are font sizes in pixels (i.e. the size of the em square).
pub trait Typeface {
    /// Compute the bounding box of a single line of text at given size.
    fn line_box(&self, line: &str, size: u32) -> TextBox;

    /// Draw a single line of text onto the layer,
    /// with its top-left corner at `origin`.
    fn draw_line(&self, layer: &mut RgbaImage, origin: (i32, i32),
                 line: &str, size: u32, color: Color);

    /// Check if the typeface can render all characters of given text.
    /// Any problems should be merely logged.
    fn check(&self, _text: &str) {}
}

impl<'t, T: Typeface + ?Sized> Typeface for &'t T {
    fn line_box(&self, line: &str, size: u32) -> TextBox {
        (**self).line_box(line, size)
    }
    fn draw_line(&self, layer: &mut RgbaImage, origin: (i32, i32),
                 line: &str, size: u32, color: Color) {
        (**self).draw_line(layer, origin, line, size, color)
    }
    fn check(&self, text: &str) {
        (**self).check(text)
    }
}


/// Compute the bounding box of several lines of text stacked on top of each other.
///
/// Lines are `spacing` pixels apart, counting from the bottom
/// of a capital letter in the preceding line.
pub fn multiline_box<T, S>(typeface: &T, lines: &[S], size: u32, spacing: u32) -> TextBox
    where T: Typeface + ?Sized, S: AsRef<str>
{
    if lines.is_empty() {
        return TextBox::default();
    }
    let line_height = typeface.line_box("A", size).bottom + spacing as i32;
    lines.iter().enumerate()
        .map(|(i, line)| {
            let dy = line_height * i as i32;
            typeface.line_box(line.as_ref(), size).shifted_down(dy)
        })
        .fold(None, |acc: Option<TextBox>, b| Some(acc.map_or(b, |a| a.union(b))))
        .unwrap_or_default()
}


/// Paint a single pixel of the text layer with given color.
///
/// `coverage` is the fraction of the pixel covered by the glyph.
/// All channels (alpha included) are moved towards the color in that proportion,
/// so that painting over a transparent layer yields a properly antialiased result.
/// Pixels outside of the layer are ignored.
pub fn paint(layer: &mut RgbaImage, x: i32, y: i32, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= layer.width() || y as u32 >= layer.height() {
        return;
    }
    let coverage = coverage.max(0.0).min(1.0);
    let pixel = layer.get_pixel_mut(x as u32, y as u32);
    let ink = color.to_rgba();
    for (channel, &target) in pixel.0.iter_mut().zip(ink.0.iter()) {
        let current = *channel as f32;
        *channel = (current + (target as f32 - current) * coverage).round() as u8;
    }
}


#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use crate::model::Color;
    use crate::util::testing::Blocks;
    use crate::util::text::{multiline_box, paint, TextBox};

    #[test]
    fn multiline_box_of_nothing_is_empty() {
        let lines: &[&str] = &[];
        assert_eq!(TextBox::default(), multiline_box(&Blocks::new(), lines, 20, 4));
    }

    #[test]
    fn multiline_box_stacks_lines() {
        let b = multiline_box(&Blocks::new(), &["ABCD", "AB"], 20, 4);
        assert_eq!(TextBox{left: 0, top: 0, right: 40, bottom: 44}, b);
        assert_eq!(40, b.width());
        assert_eq!(44, b.height());
    }

    #[test]
    fn paint_blends_all_channels() {
        let mut layer = RgbaImage::new(2, 2);
        paint(&mut layer, 0, 0, Color::white(), 1.0);
        paint(&mut layer, 1, 0, Color::white(), 0.5);
        assert_eq!(&Rgba([255, 255, 255, 255]), layer.get_pixel(0, 0));
        assert_eq!(&Rgba([128, 128, 128, 128]), layer.get_pixel(1, 0));
        assert_eq!(&Rgba([0, 0, 0, 0]), layer.get_pixel(0, 1));
    }

    #[test]
    fn paint_ignores_out_of_bounds() {
        let mut layer = RgbaImage::new(2, 2);
        paint(&mut layer, -1, 0, Color::white(), 1.0);
        paint(&mut layer, 0, 2, Color::white(), 1.0);
        assert!(layer.pixels().all(|p| p == &Rgba([0, 0, 0, 0])));
    }
}
