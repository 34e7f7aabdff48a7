//! Module implementing the `LayoutConfig` type and its builder.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error as ThisError;

use crate::model::constants::{DEFAULT_COLOR, DEFAULT_HALIGN, DEFAULT_MAX_FONT_SIZE,
                              DEFAULT_MAX_TEXT_HEIGHT, DEFAULT_OUTLINE_COLOR,
                              DEFAULT_OUTLINE_WIDTH, DEFAULT_PADDING, DEFAULT_VALIGN,
                              MAX_FONT_SIZE, MAX_OUTLINE_WIDTH, MAX_PADDING,
                              MAX_TEXT_HEIGHT, MIN_FONT_SIZE};
use super::align::{HAlign, VAlign};
use super::color::Color;


/// Distance between the image edges and the text, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Padding {
    /// Create a padding that's the same on all sides.
    #[inline]
    pub fn uniform(value: u32) -> Self {
        Padding{left: value, right: value, top: value, bottom: value}
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::uniform(DEFAULT_PADDING)
    }
}


/// Describes how the text is laid out over the image.
///
/// This is an immutable bundle of all the parameters of a single overlay,
/// apart from the text itself. Use `LayoutConfigBuilder` to create it.
#[derive(Builder, Clone, PartialEq)]
#[builder(derive(Debug, PartialEq),
          pattern = "owned", build_fn(skip))]
pub struct LayoutConfig {
    /// Path to the font file (`.ttf` or `.otf`) to render the text with.
    ///
    /// This must already be resolved; see `FontLoader::resolve`.
    #[builder(setter(into))]
    pub font: PathBuf,
    /// Font size that the text starts out at.
    /// It will be shrunk until the text fits. Defaults to 128.
    pub max_font_size: u32,
    /// Text color, defaults to white.
    pub font_color: Color,
    /// Color of the text outline, defaults to black.
    pub outline_color: Color,
    /// Width of the outline in pixels. Zero means no outline.
    pub outline_width: u32,
    /// Horizontal alignment of each text line. Default is `HAlign::Center`.
    pub halign: HAlign,
    /// Vertical alignment of the whole text block. Default is `VAlign::Bottom`.
    pub valign: VAlign,
    /// Padding around the text. Defaults to 20 pixels on each side.
    pub padding: Padding,
    /// Maximum height of the whole text block, in pixels.
    ///
    /// This is independent from the image height.
    pub max_text_height: u32,
}

impl LayoutConfig {
    /// Create a builder for `LayoutConfig` that renders with given font file.
    #[inline]
    pub fn with_font<P: Into<PathBuf>>(font: P) -> LayoutConfigBuilder {
        LayoutConfigBuilder::default().font(font)
    }
}

impl fmt::Debug for LayoutConfig {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{valign}-{halign}{{{font:?} <={size}px {color}/{outline}x{width} \
                     pad({l},{r},{t},{b}) h<={height}}}",
            valign = self.valign, halign = self.halign,
            font = self.font.display().to_string(),
            size = self.max_font_size,
            color = self.font_color,
            outline = self.outline_color,
            width = self.outline_width,
            l = self.padding.left, r = self.padding.right,
            t = self.padding.top, b = self.padding.bottom,
            height = self.max_text_height)
    }
}


impl LayoutConfigBuilder {
    /// Build the resulting `LayoutConfig`.
    pub fn build(self) -> Result<LayoutConfig, Error> {
        self.validate()?;
        Ok(LayoutConfig{
            // Note that we can't use #[builder(default)] if we override the build()
            // method with #[builder(build_fn)], which is why we have to put the defaults here.
            font: self.font.ok_or(Error::NoFont)?,
            max_font_size: self.max_font_size.unwrap_or(DEFAULT_MAX_FONT_SIZE),
            font_color: self.font_color.unwrap_or(DEFAULT_COLOR),
            outline_color: self.outline_color.unwrap_or(DEFAULT_OUTLINE_COLOR),
            outline_width: self.outline_width.unwrap_or(DEFAULT_OUTLINE_WIDTH),
            halign: self.halign.unwrap_or(DEFAULT_HALIGN),
            valign: self.valign.unwrap_or(DEFAULT_VALIGN),
            padding: self.padding.unwrap_or_default(),
            max_text_height: self.max_text_height.unwrap_or(DEFAULT_MAX_TEXT_HEIGHT),
        })
    }

    #[doc(hidden)]
    fn validate(&self) -> Result<(), Error> {
        if self.font.is_none() {
            return Err(Error::NoFont);
        }
        if let Some(size) = self.max_font_size {
            if size < MIN_FONT_SIZE || size > MAX_FONT_SIZE {
                return Err(Error::FontSize(size));
            }
        }
        if let Some(width) = self.outline_width {
            if width > MAX_OUTLINE_WIDTH {
                return Err(Error::OutlineWidth(width));
            }
        }
        if let Some(ref padding) = self.padding {
            let largest = padding.left.max(padding.right).max(padding.top).max(padding.bottom);
            if largest > MAX_PADDING {
                return Err(Error::Padding(largest));
            }
        }
        if let Some(height) = self.max_text_height {
            if height < 1 || height > MAX_TEXT_HEIGHT {
                return Err(Error::TextHeight(height));
            }
        }
        Ok(())
    }
}


/// Error while building a `LayoutConfig`.
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum Error {
    /// No font given.
    #[error("no font chosen")]
    NoFont,
    /// Maximum font size out of range.
    #[error("font size must be between 1 and 9999, got {0}")]
    FontSize(u32),
    /// Outline too wide.
    #[error("outline too wide: {0} > 10")]
    OutlineWidth(u32),
    /// Padding too large.
    #[error("padding too large: {0} > 9999")]
    Padding(u32),
    /// Maximum text height out of range.
    #[error("text height must be between 1 and 9999, got {0}")]
    TextHeight(u32),
}


/// Text broken into lines at the font size which makes it fit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBlock {
    /// Lines of text, in order.
    pub lines: Vec<String>,
    /// Font size the lines are rendered with.
    pub size: u32,
}

impl TextBlock {
    /// Whether there is anything to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
