//! Module implementing the node's input parameters.

use std::fmt;
use std::path::PathBuf;

use crate::model::{Color, HAlign, LayoutConfig, LayoutConfigError, Padding, VAlign,
                   DEFAULT_COLOR, DEFAULT_HALIGN, DEFAULT_MAX_FONT_SIZE, DEFAULT_MAX_TEXT_HEIGHT,
                   DEFAULT_OUTLINE_COLOR, DEFAULT_OUTLINE_WIDTH, DEFAULT_PADDING, DEFAULT_VALIGN};


/// Text that the node starts out with.
pub const DEFAULT_MEME_TEXT: &'static str = "Your Meme Text Here";


/// Parameters of a single node invocation, as passed by the host.
///
/// All of them except `font` have defaults.
#[derive(Clone, Deserialize, PartialEq)]
pub struct NodeInputs {
    #[serde(default = "default::meme_text")]
    pub meme_text: String,
    /// File name of the font, relative to the host's input directory.
    pub font: String,
    #[serde(default = "default::max_font_size")]
    pub max_font_size: u32,
    #[serde(default = "default::font_color")]
    pub font_color: Color,
    #[serde(default = "default::outline_color")]
    pub outline_color: Color,
    #[serde(default = "default::outline_width")]
    pub outline_width: u32,
    #[serde(default = "default::horizontal_align")]
    pub horizontal_align: HAlign,
    #[serde(default = "default::vertical_align")]
    pub vertical_align: VAlign,
    #[serde(default = "default::padding")]
    pub padding_left: u32,
    #[serde(default = "default::padding")]
    pub padding_right: u32,
    #[serde(default = "default::padding")]
    pub padding_top: u32,
    #[serde(default = "default::padding")]
    pub padding_bottom: u32,
    /// Maximum height of the text block.
    #[serde(default = "default::meme_height")]
    pub meme_height: u32,
}

impl NodeInputs {
    /// Create the inputs with given font and all other parameters at their defaults.
    pub fn with_font<S: Into<String>>(font: S) -> Self {
        NodeInputs{
            meme_text: default::meme_text(),
            font: font.into(),
            max_font_size: default::max_font_size(),
            font_color: default::font_color(),
            outline_color: default::outline_color(),
            outline_width: default::outline_width(),
            horizontal_align: default::horizontal_align(),
            vertical_align: default::vertical_align(),
            padding_left: default::padding(),
            padding_right: default::padding(),
            padding_top: default::padding(),
            padding_bottom: default::padding(),
            meme_height: default::meme_height(),
        }
    }

    #[inline]
    pub fn padding(&self) -> Padding {
        Padding{
            left: self.padding_left,
            right: self.padding_right,
            top: self.padding_top,
            bottom: self.padding_bottom,
        }
    }

    /// Create the `LayoutConfig` for rendering with the font at given path.
    pub fn layout_config(&self, font: PathBuf) -> Result<LayoutConfig, LayoutConfigError> {
        LayoutConfig::with_font(font)
            .max_font_size(self.max_font_size)
            .font_color(self.font_color)
            .outline_color(self.outline_color)
            .outline_width(self.outline_width)
            .halign(self.horizontal_align)
            .valign(self.vertical_align)
            .padding(self.padding())
            .max_text_height(self.meme_height)
            .build()
    }
}

impl fmt::Debug for NodeInputs {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{valign}-{halign}{{{font:?} <={size}px {color}/{outline}x{width} \
                     pad({l},{r},{t},{b}) h<={height}}}({text:?})",
            text = self.meme_text,
            valign = self.vertical_align, halign = self.horizontal_align,
            font = self.font,
            size = self.max_font_size,
            color = self.font_color,
            outline = self.outline_color,
            width = self.outline_width,
            l = self.padding_left, r = self.padding_right,
            t = self.padding_top, b = self.padding_bottom,
            height = self.meme_height)
    }
}

mod default {
    use super::*;

    pub fn meme_text() -> String { DEFAULT_MEME_TEXT.to_owned() }
    pub fn max_font_size() -> u32 { DEFAULT_MAX_FONT_SIZE }
    pub fn font_color() -> Color { DEFAULT_COLOR }
    pub fn outline_color() -> Color { DEFAULT_OUTLINE_COLOR }
    pub fn outline_width() -> u32 { DEFAULT_OUTLINE_WIDTH }
    pub fn horizontal_align() -> HAlign { DEFAULT_HALIGN }
    pub fn vertical_align() -> VAlign { DEFAULT_VALIGN }
    pub fn padding() -> u32 { DEFAULT_PADDING }
    pub fn meme_height() -> u32 { DEFAULT_MAX_TEXT_HEIGHT }
}
