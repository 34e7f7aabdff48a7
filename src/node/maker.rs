//! Module implementing the meme maker node itself.

use image::DynamicImage;

use crate::caption::{CaptionError, TextOverlayRenderer};
use crate::model::{HAlign, VAlign, MAX_FONT_SIZE, MAX_OUTLINE_WIDTH, MAX_PADDING, MAX_TEXT_HEIGHT,
                   MIN_FONT_SIZE};
use crate::resources::{FontLoader, Loader};
use crate::tensor::{ImageTensor, MaskTensor};
use super::error::NodeError;
use super::host::Host;
use super::inputs::{NodeInputs, DEFAULT_MEME_TEXT};
use super::schema::{InputSpec, InputType, InputTypes};


/// Node which adds meme-style text to an image.
///
/// Fonts are read from the host's input directory.
#[derive(Debug)]
pub struct MemeMaker<H: Host> {
    host: H,
    renderer: TextOverlayRenderer,
}

impl<H: Host> MemeMaker<H> {
    #[inline]
    pub fn new(host: H) -> Self {
        Self::with_renderer(host, TextOverlayRenderer::new())
    }

    #[inline]
    pub fn with_renderer(host: H, renderer: TextOverlayRenderer) -> Self {
        MemeMaker{host, renderer}
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    fn font_loader(&self) -> FontLoader {
        FontLoader::new(self.host.input_directory())
    }
}

impl<H: Host> MemeMaker<H> {
    /// Describe the node's parameters.
    ///
    /// Font choices are the font files currently present in the input directory.
    pub fn input_types(&self) -> Result<InputTypes, NodeError> {
        let fonts = self.font_loader().list()?;
        if fonts.is_empty() {
            warn!("No fonts found in {}", self.host.input_directory().display());
        }

        let int = |default: u32, min: u32, max: u32| InputType::Int{
            default: default as i64, min: min as i64, max: max as i64, step: 1,
        };
        let inputs = NodeInputs::with_font("");
        Ok(InputTypes{
            required: vec![
                InputSpec::new("meme_text", InputType::String{
                    default: DEFAULT_MEME_TEXT.to_owned(), multiline: true,
                }),
                InputSpec::new("font", InputType::Choice{options: fonts, default: None}),
                InputSpec::new("max_font_size", int(inputs.max_font_size, MIN_FONT_SIZE, MAX_FONT_SIZE)),
                InputSpec::new("font_color", InputType::String{
                    default: "#FFFFFF".to_owned(), multiline: false,
                }),
                InputSpec::new("outline_color", InputType::String{
                    default: "#000000".to_owned(), multiline: false,
                }),
                InputSpec::new("outline_width", int(inputs.outline_width, 0, MAX_OUTLINE_WIDTH)),
                InputSpec::new("horizontal_align", InputType::Choice{
                    options: HAlign::iter_variants().map(|a| a.as_str().to_owned()).collect(),
                    default: Some(inputs.horizontal_align.to_string()),
                }),
                InputSpec::new("vertical_align", InputType::Choice{
                    options: VAlign::iter_variants().map(|a| a.as_str().to_owned()).collect(),
                    default: Some(inputs.vertical_align.to_string()),
                }),
                InputSpec::new("padding_left", int(inputs.padding_left, 0, MAX_PADDING)),
                InputSpec::new("padding_right", int(inputs.padding_right, 0, MAX_PADDING)),
                InputSpec::new("padding_top", int(inputs.padding_top, 0, MAX_PADDING)),
                InputSpec::new("padding_bottom", int(inputs.padding_bottom, 0, MAX_PADDING)),
                InputSpec::new("meme_height", int(inputs.meme_height, 1, MAX_TEXT_HEIGHT)),
            ],
            optional: vec![
                InputSpec::new("image_input", InputType::Image),
            ],
        })
    }

    /// Execute the node, rendering the text over the input image.
    ///
    /// Returns the resulting RGB image and its alpha mask.
    pub fn execute(&self, inputs: &NodeInputs,
                   image: Option<&ImageTensor>) -> Result<(ImageTensor, MaskTensor), NodeError> {
        debug!("Executing node with {:?}", inputs);
        let image = image.ok_or(CaptionError::MissingInput)?;

        let fonts = self.font_loader();
        let config = inputs.layout_config(fonts.resolve(&inputs.font)?)?;
        let font = fonts.load(&inputs.font)
            .map_err(|e| CaptionError::Font(config.font.clone(), e))?;

        let image = DynamicImage::ImageRgba8(image.to_image());
        let output = self.renderer.render_with(&image, &inputs.meme_text, &config, &font);
        Ok(output.into_tensors())
    }
}
