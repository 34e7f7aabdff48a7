//! Defines the output of a captioning operation.

use std::ops::Deref;

use image::RgbaImage;

use crate::tensor::{ImageTensor, MaskTensor};


/// Output of the captioning process.
#[derive(Clone, Debug)]
#[must_use = "unused caption output which must be used"]
pub struct CaptionOutput {
    image: RgbaImage,
}

impl CaptionOutput {
    #[inline]
    pub(super) fn new(image: RgbaImage) -> Self {
        CaptionOutput{image}
    }
}

impl CaptionOutput {
    /// The image with the text composited onto it.
    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Convert the output into the resulting image.
    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Convert the output into the tensors expected by the host:
    /// the RGB image and its alpha mask.
    pub fn into_tensors(self) -> (ImageTensor, MaskTensor) {
        let tensor = ImageTensor::from_image(&self.image);
        (tensor.rgb(), tensor.mask())
    }
}

impl Deref for CaptionOutput {
    type Target = RgbaImage;

    fn deref(&self) -> &Self::Target {
        self.image()
    }
}

impl Into<RgbaImage> for CaptionOutput {
    fn into(self) -> RgbaImage {
        self.into_image()
    }
}
