//! Image decoding for texture registration.
//!
//! Decoded rows are stored bottom-up: the first row of `pixels` is the bottom
//! row of the picture, which matches a texture coordinate origin in the
//! lower-left corner.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};

use crate::error::DecodeError;

/// Raw pixel data produced by an [`ImageDecoder`].
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl DecodedImage {
    /// Expand the pixels to tightly packed RGBA8.
    ///
    /// Three channel images get an opaque alpha. Images with any other channel
    /// count are returned as they are, callers check the layout first.
    pub fn to_rgba8(&self) -> Vec<u8> {
        match self.channels {
            3 => self
                .pixels
                .chunks_exact(3)
                .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], u8::MAX])
                .collect(),
            _ => self.pixels.clone(),
        }
    }
}

/// Pixel layout a texture is uploaded with, selected by channel count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    Rgb,
    Rgba,
}

impl PixelLayout {
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(PixelLayout::Rgb),
            4 => Some(PixelLayout::Rgba),
            _ => None,
        }
    }
}

/// Turns an image file into raw, vertically flipped pixels.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError>;
}

/// [`ImageDecoder`] backed by the `image` crate.
///
/// The channel count of the file is preserved (a JPEG decodes to 3 channels,
/// a PNG with alpha to 4, a grey PNG to 1 or 2) so that the registry can
/// decide what it supports. Relative paths are looked up under `root`.
#[derive(Clone, Debug, Default)]
pub struct ImageCrateDecoder {
    root: PathBuf,
}

impl ImageCrateDecoder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError> {
        let bytes = std::fs::read(self.root.join(path))?;
        let img = image::load_from_memory(&bytes)?.flipv();
        Ok(decoded_from_dynamic(img))
    }
}

pub(crate) fn decoded_from_dynamic(img: DynamicImage) -> DecodedImage {
    let (width, height) = img.dimensions();
    let channels = img.color().channel_count();
    let pixels = match channels {
        3 => img.into_rgb8().into_raw(),
        4 => img.into_rgba8().into_raw(),
        _ => img.into_bytes(),
    };
    DecodedImage {
        pixels,
        width,
        height,
        channels,
    }
}
