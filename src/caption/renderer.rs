//! Module which defines the text overlay renderer.

use image::DynamicImage;
use unicode_normalization::UnicodeNormalization;

use crate::model::LayoutConfig;
use crate::resources::Font;
use crate::util::text::Typeface;
use super::config::Config;
use super::error::CaptionError;
use super::output::CaptionOutput;
use super::task::CaptionTask;


/// Renderer of meme-style text over images.
///
/// The renderer holds no state between calls apart from its configuration.
/// Every call loads the font it needs and never modifies the input image.
#[derive(Clone, Debug, Default)]
pub struct TextOverlayRenderer {
    config: Config,
}

impl TextOverlayRenderer {
    /// Create a renderer with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with given configuration.
    #[inline]
    pub fn with_config(config: Config) -> Self {
        TextOverlayRenderer{config}
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl TextOverlayRenderer {
    /// Render the text over the image, using the font file given in `config`.
    pub fn render(&self, image: Option<&DynamicImage>, text: &str,
                  config: &LayoutConfig) -> Result<CaptionOutput, CaptionError> {
        let image = image.ok_or(CaptionError::MissingInput)?;
        let font = Font::from_path(&config.font)
            .map_err(|e| CaptionError::Font(config.font.clone(), e))?;
        Ok(self.render_with(image, text, config, &font))
    }

    /// Render the text over the image using given typeface.
    ///
    /// The font path in `config` is ignored.
    pub fn render_with<T>(&self, image: &DynamicImage, text: &str,
                          config: &LayoutConfig, typeface: &T) -> CaptionOutput
        where T: Typeface + ?Sized
    {
        let text = normalize(text);
        trace!("Checking if the typeface has all glyphs for the text: {}", text);
        typeface.check(&text);
        CaptionTask::new(text, config, &self.config, typeface).perform(image)
    }
}

/// Normalize the text into the form it is rendered in, i.e. all uppercase.
///
/// Text is also composed into Unicode NFC first, so an accented letter
/// typed as a base letter plus a combining mark counts as one character
/// when the text is wrapped.
fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_uppercase()
}
