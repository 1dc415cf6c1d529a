use std::path::{Path, PathBuf};

use parlor::{
    error::DecodeError,
    resources::decoder::{DecodedImage, ImageCrateDecoder, ImageDecoder, PixelLayout},
};

/// Directory under the system temp dir, removed again when dropped.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("parlor-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[test]
fn rgb_png_decodes_bottom_row_first() {
    let scratch = ScratchDir::new("rgb");
    let dir = scratch.path();
    let mut img = image::RgbImage::new(2, 2);
    img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
    img.put_pixel(0, 1, image::Rgb([0, 255, 0]));
    img.save(dir.join("tile.png")).unwrap();

    let decoded = ImageCrateDecoder::new(dir)
        .decode(Path::new("tile.png"))
        .unwrap();
    assert_eq!((decoded.width, decoded.height, decoded.channels), (2, 2, 3));
    assert_eq!(decoded.pixels.len(), 12);
    // bottom-left pixel of the file comes first
    assert_eq!(&decoded.pixels[0..3], &[0, 255, 0]);
    assert_eq!(&decoded.pixels[6..9], &[255, 0, 0]);
}

#[test]
fn alpha_is_preserved() {
    let scratch = ScratchDir::new("rgba");
    let dir = scratch.path();
    image::RgbaImage::from_pixel(3, 1, image::Rgba([10, 20, 30, 40]))
        .save(dir.join("decal.png"))
        .unwrap();

    let decoded = ImageCrateDecoder::new(dir)
        .decode(Path::new("decal.png"))
        .unwrap();
    assert_eq!(decoded.channels, 4);
    assert_eq!(decoded.pixels, [10, 20, 30, 40].repeat(3));
}

#[test]
fn grey_alpha_keeps_two_channels() {
    let scratch = ScratchDir::new("la");
    let dir = scratch.path();
    image::GrayAlphaImage::from_pixel(2, 2, image::LumaA([200, 255]))
        .save(dir.join("mask.png"))
        .unwrap();

    let decoded = ImageCrateDecoder::new(dir)
        .decode(Path::new("mask.png"))
        .unwrap();
    assert_eq!(decoded.channels, 2);
    assert_eq!(PixelLayout::from_channels(decoded.channels), None);
}

#[test]
fn missing_file_is_an_io_error() {
    let scratch = ScratchDir::new("missing");
    let decoder = ImageCrateDecoder::new(scratch.path());
    let err = decoder.decode(Path::new("nothing.jpg")).unwrap_err();
    assert!(matches!(err, DecodeError::Io(_)));
}

#[test]
fn garbage_is_an_image_error() {
    let scratch = ScratchDir::new("garbage");
    let dir = scratch.path();
    std::fs::write(dir.join("noise.png"), b"definitely not a png").unwrap();
    let err = ImageCrateDecoder::new(dir)
        .decode(Path::new("noise.png"))
        .unwrap_err();
    assert!(matches!(err, DecodeError::Image(_)));
}

#[test]
fn rgb_widens_to_opaque_rgba() {
    let image = DecodedImage {
        pixels: vec![1, 2, 3, 4, 5, 6],
        width: 2,
        height: 1,
        channels: 3,
    };
    assert_eq!(image.to_rgba8(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn layouts_by_channel_count() {
    assert_eq!(PixelLayout::from_channels(3), Some(PixelLayout::Rgb));
    assert_eq!(PixelLayout::from_channels(4), Some(PixelLayout::Rgba));
    assert_eq!(PixelLayout::from_channels(1), None);
    assert_eq!(PixelLayout::from_channels(2), None);
}

#[test]
fn scratch_dir_is_removed_on_drop() {
    let scratch = ScratchDir::new("cleanup");
    let dir = scratch.path().to_path_buf();
    std::fs::write(dir.join("left.png"), b"x").unwrap();
    drop(scratch);
    assert!(!dir.exists());
}

#[test]
fn root_is_kept() {
    let decoder = ImageCrateDecoder::new("assets");
    assert_eq!(decoder.root(), Path::new("assets"));
}
