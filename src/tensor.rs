//! Module implementing the host's numeric image representation.
//!
//! Images travel through the host pipeline as batches of `f32` pixels
//! in `[0, 1]`, laid out as `[batch, height, width, channels]`.
//! Masks are the same but without the channel axis.

use std::convert::TryFrom;
use std::fmt;

use image::{Rgba, RgbaImage};
use thiserror::Error;


/// Channel count of an RGB image tensor.
pub const RGB_CHANNELS: usize = 3;
/// Channel count of an RGBA image tensor.
pub const RGBA_CHANNELS: usize = 4;


/// Image in the form of a `[1, H, W, C]` tensor of `f32` values.
///
/// `C` is either 3 (RGB) or 4 (RGBA). Data is stored row-major.
#[derive(Clone, PartialEq)]
pub struct ImageTensor {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<f32>,
}

impl ImageTensor {
    /// Create the tensor from its shape and flat data.
    ///
    /// Only the first image of a larger batch is kept.
    pub fn new(shape: [usize; 4], mut data: Vec<f32>) -> Result<Self, TensorError> {
        let [batch, height, width, channels] = shape;
        if channels != RGB_CHANNELS && channels != RGBA_CHANNELS {
            return Err(TensorError::Channels(channels));
        }
        if batch == 0 {
            return Err(TensorError::EmptyBatch);
        }
        check_dimensions(height, width)?;

        let image_len = height * width * channels;
        let expected = image_len.checked_mul(batch).ok_or(TensorError::TooLarge(height, width))?;
        if data.len() != expected {
            return Err(TensorError::Length{expected, actual: data.len()});
        }
        if batch > 1 {
            warn!("Got a batch of {} images, only the first one will be used", batch);
            data.truncate(image_len);
        }
        Ok(ImageTensor{height, width, channels, data})
    }

    /// Convert an RGBA image into a tensor with values in `[0, 1]`.
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let data = image.as_raw().iter().map(|&v| v as f32 / 255.0).collect();
        ImageTensor{
            height: height as usize,
            width: width as usize,
            channels: RGBA_CHANNELS,
            data,
        }
    }
}

impl ImageTensor {
    /// Shape of the tensor, `[1, H, W, C]`.
    #[inline]
    pub fn shape(&self) -> [usize; 4] {
        [1, self.height, self.width, self.channels]
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == RGBA_CHANNELS
    }

    /// Flat tensor data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data[..]
    }

    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    fn pixels<'t>(&'t self) -> impl Iterator<Item=&'t [f32]> + 't {
        self.data.chunks(self.channels)
    }
}

impl ImageTensor {
    /// Convert the tensor to an RGBA image.
    ///
    /// Values are scaled to `[0, 255]` and truncated.
    /// RGB tensors produce a fully opaque image.
    pub fn to_image(&self) -> RgbaImage {
        // Both dimensions were checked to fit in u32 when the tensor was made,
        // and the data length was checked against them.
        let (width, height) = (self.width as u32, self.height as u32);
        RgbaImage::from_fn(width, height, |x, y| {
            let offset = (y as usize * self.width + x as usize) * self.channels;
            let pixel = &self.data[offset..offset + self.channels];
            let alpha = if self.has_alpha() { to_byte(pixel[3]) } else { 0xff };
            Rgba([to_byte(pixel[0]), to_byte(pixel[1]), to_byte(pixel[2]), alpha])
        })
    }

    /// Tensor with only the color channels of this one.
    pub fn rgb(&self) -> ImageTensor {
        if !self.has_alpha() {
            return self.clone();
        }
        let data = self.pixels().flat_map(|p| p[..RGB_CHANNELS].iter().cloned()).collect();
        ImageTensor{channels: RGB_CHANNELS, data, ..*self}
    }

    /// Mask made from the alpha channel of this tensor,
    /// or a mask of all ones if there is no alpha channel.
    pub fn mask(&self) -> MaskTensor {
        if !self.has_alpha() {
            return MaskTensor::ones(self.height, self.width);
        }
        let data = self.pixels().map(|p| p[RGBA_CHANNELS - 1]).collect();
        MaskTensor{height: self.height, width: self.width, data}
    }
}

impl fmt::Debug for ImageTensor {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "ImageTensor{:?}", self.shape())
    }
}


/// Mask in the form of a `[1, H, W]` tensor of `f32` values.
#[derive(Clone, PartialEq)]
pub struct MaskTensor {
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl MaskTensor {
    /// Create the mask from its shape and flat data.
    pub fn new(shape: [usize; 3], data: Vec<f32>) -> Result<Self, TensorError> {
        let [batch, height, width] = shape;
        if batch != 1 {
            return Err(TensorError::Batch(batch));
        }
        check_dimensions(height, width)?;
        if data.len() != height * width {
            return Err(TensorError::Length{expected: height * width, actual: data.len()});
        }
        Ok(MaskTensor{height, width, data})
    }

    /// Create a mask that's fully opaque.
    pub fn ones(height: usize, width: usize) -> Self {
        MaskTensor{height, width, data: vec![1.0; height * width]}
    }
}

impl MaskTensor {
    /// Shape of the mask, `[1, H, W]`.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        [1, self.height, self.width]
    }

    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data[..]
    }

    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }
}

impl fmt::Debug for MaskTensor {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "MaskTensor{:?}", self.shape())
    }
}


/// Error for when the tensor data doesn't describe a valid image.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TensorError {
    /// Image tensor with an unsupported number of channels.
    #[error("image must have 3 or 4 channels, got {0}")]
    Channels(usize),
    /// Image tensor with no images in it.
    #[error("image batch is empty")]
    EmptyBatch,
    /// Mask tensor with a batch of other size than one.
    #[error("mask batch must have exactly one element, got {0}")]
    Batch(usize),
    /// Data length doesn't match the shape.
    #[error("tensor data has {actual} value(s), expected {expected}")]
    Length { expected: usize, actual: usize },
    /// Image dimensions too large to handle.
    #[error("image too large: {0}x{1}")]
    TooLarge(usize, usize),
}


fn check_dimensions(height: usize, width: usize) -> Result<(), TensorError> {
    let too_large = || TensorError::TooLarge(height, width);
    u32::try_from(height).map_err(|_| too_large())?;
    u32::try_from(width).map_err(|_| too_large())?;
    height.checked_mul(width)
        .and_then(|n| n.checked_mul(RGBA_CHANNELS))
        .ok_or_else(too_large)?;
    Ok(())
}

/// Convert a `[0, 1]` value to a byte, truncating the fractional part.
#[inline]
fn to_byte(value: f32) -> u8 {
    // Float-to-int `as` casts saturate (and map NaN to zero).
    (value * 255.0) as u8
}
