//! Module defining constants relevant to the data model.

use super::types::{Color, HAlign, VAlign};


/// Default color of the text.
pub const DEFAULT_COLOR: Color = Color(0xff, 0xff, 0xff, 0xff);
/// Default color of the text outline.
pub const DEFAULT_OUTLINE_COLOR: Color = Color(0x0, 0x0, 0x0, 0xff);

/// Default width of the text outline, in pixels.
pub const DEFAULT_OUTLINE_WIDTH: u32 = 2;

/// Default horizontal alignment of text.
pub const DEFAULT_HALIGN: HAlign = HAlign::Center;
/// Default vertical alignment of text.
pub const DEFAULT_VALIGN: VAlign = VAlign::Bottom;

/// Default font size that the text starts out at before it's shrunk to fit.
pub const DEFAULT_MAX_FONT_SIZE: u32 = 128;
/// Default padding between the image edges and the text, in pixels.
pub const DEFAULT_PADDING: u32 = 20;
/// Default maximum height of the whole text block, in pixels.
pub const DEFAULT_MAX_TEXT_HEIGHT: u32 = 128;


/// Smallest font size the text can be shrunk to.
pub const MIN_FONT_SIZE: u32 = 1;
/// Largest font size that can be requested.
pub const MAX_FONT_SIZE: u32 = 9999;

/// Maximum width of the text outline.
///
/// The outline is drawn by stamping the text (2w+1)^2 - 1 times,
/// so this needs to stay small.
pub const MAX_OUTLINE_WIDTH: u32 = 10;

/// Maximum padding on any side of the image.
pub const MAX_PADDING: u32 = 9999;

/// Maximum height of the text block.
pub const MAX_TEXT_HEIGHT: u32 = 9999;
