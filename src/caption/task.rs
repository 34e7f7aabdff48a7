//! Module implementing the actual captioning task.
//! Most if not all of the drawing logic lives here.

use std::ops::Deref;

use image::{imageops, DynamicImage, GenericImageView, RgbaImage};

use crate::model::LayoutConfig;
use crate::util::text::Typeface;
use super::config::Config;
use super::fit::fit_text;
use super::layout::{place_lines, PlacedLine};
use super::output::CaptionOutput;


/// Represents a single captioning task and contains all the relevant logic.
///
/// This is a separate struct so that all the inputs of a single render
/// can be easily carried between its methods.
pub(super) struct CaptionTask<'a, T: Typeface + ?Sized + 'a> {
    config: &'a LayoutConfig,
    renderer_config: &'a Config,
    typeface: &'a T,
    text: String,
}

impl<'a, T: Typeface + ?Sized + 'a> Deref for CaptionTask<'a, T> {
    type Target = LayoutConfig;
    fn deref(&self) -> &Self::Target {
        self.config  // makes the rendering code a little terser
    }
}

impl<'a, T: Typeface + ?Sized + 'a> CaptionTask<'a, T> {
    /// Create the task.
    /// The text is expected to be already normalized.
    #[inline]
    pub fn new(text: String, config: &'a LayoutConfig,
               renderer_config: &'a Config, typeface: &'a T) -> Self {
        CaptionTask{config, renderer_config, typeface, text}
    }
}

impl<'a, T: Typeface + ?Sized + 'a> CaptionTask<'a, T> {
    /// Perform the captioning task on given image.
    pub fn perform(self, img: &DynamicImage) -> CaptionOutput {
        let (width, height) = img.dimensions();
        debug!("Rendering {:?} over {}x{} image: {:?}", self.config, width, height, self.text);

        let max_width = width as i32 - self.padding.left as i32 - self.padding.right as i32;
        let max_height = self.max_text_height as i32;
        let block = fit_text(self.typeface, &self.text,
                             max_width, max_height, self.max_font_size, self.renderer_config);
        let lines = place_lines(self.typeface, &block, (width, height), self.config);

        let layer = self.draw_layer((width, height), &lines, block.size);

        // Rendering text requires alpha blending.
        trace!("Compositing text layer onto the image...");
        let mut result = img.to_rgba8();
        imageops::overlay(&mut result, &layer, 0, 0);
        CaptionOutput::new(result)
    }

    /// Draw the text lines (with their outline) on a transparent layer.
    fn draw_layer(&self, (width, height): (u32, u32),
                  lines: &[PlacedLine], size: u32) -> RgbaImage {
        let mut layer = RgbaImage::new(width, height);
        let w = self.outline_width as i32;
        for line in lines {
            // Stamp copies of the text shifted in every direction
            // to create the outline.
            if w > 0 {
                trace!("Drawing {} outline stamp(s) for line {:?}", (2 * w + 1).pow(2) - 1, line.text);
                for dx in -w..=w {
                    for dy in -w..=w {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        self.typeface.draw_line(&mut layer, (line.x + dx, line.y + dy),
                                                &line.text, size, self.outline_color);
                    }
                }
            }
            // Now render the actual text in the unshifted position.
            self.typeface.draw_line(&mut layer, (line.x, line.y),
                                    &line.text, size, self.font_color);
        }
        layer
    }
}
