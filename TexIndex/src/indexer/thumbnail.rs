//! Preview thumbnail generation

use std::io::{Cursor, Write};
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Produces a square preview image for a texture.
///
/// Implementations are called concurrently for distinct destinations.
pub trait Thumbnailer: Sync {
    /// Write a thumbnail of `source` at `dest`, at most `size` pixels per side
    fn generate(&self, source: &Path, dest: &Path, size: u32) -> Result<()>;
}

/// Thumbnailer backed by the `image` crate.
///
/// Cover-crops to a `size x size` square with Lanczos3 resampling, without
/// enlarging: each side is capped at the source's side. The output format
/// follows the destination extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageThumbnailer;

/// Resize and center-crop to fill the target box
#[must_use]
pub fn cover_crop(img: &DynamicImage, size: u32) -> DynamicImage {
    let width = size.min(img.width()).max(1);
    let height = size.min(img.height()).max(1);
    img.resize_to_fill(width, height, FilterType::Lanczos3)
}

fn write_failed(dest: &Path, message: impl ToString) -> Error {
    Error::ThumbnailWriteFailed {
        path: dest.to_path_buf(),
        message: message.to_string(),
    }
}

impl Thumbnailer for ImageThumbnailer {
    fn generate(&self, source: &Path, dest: &Path, size: u32) -> Result<()> {
        let img = image::open(source).map_err(|e| Error::ThumbnailSourceFailed {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let format = ImageFormat::from_path(dest).map_err(|e| write_failed(dest, e))?;
        let thumb = cover_crop(&img, size);
        // JPEG has no alpha channel
        let thumb = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(thumb.to_rgb8()),
            _ => DynamicImage::ImageRgba8(thumb.to_rgba8()),
        };

        let mut encoded = Vec::new();
        thumb
            .write_to(&mut Cursor::new(&mut encoded), format)
            .map_err(|e| write_failed(dest, e))?;

        // Publish atomically so an aborted run never leaves a truncated
        // thumbnail that later runs would reuse
        let dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&encoded)?;
        tmp.persist(dest).map_err(|e| write_failed(dest, e.error))?;

        tracing::debug!(
            "Thumbnail {} ({}x{}) from {}",
            dest.display(),
            thumb.width(),
            thumb.height(),
            source.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_source(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([200, 120, 40, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_cover_crop_dimensions() {
        let wide = DynamicImage::ImageRgba8(RgbaImage::new(800, 400));
        let thumb = cover_crop(&wide, 320);
        assert_eq!((thumb.width(), thumb.height()), (320, 320));

        let small = DynamicImage::ImageRgba8(RgbaImage::new(100, 80));
        let thumb = cover_crop(&small, 320);
        assert_eq!((thumb.width(), thumb.height()), (100, 80));
    }

    #[test]
    fn test_generate_webp() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path(), "oak_basecolor.png", 640, 400);
        let dest = dir.path().join("thumb.webp");

        ImageThumbnailer.generate(&source, &dest, 320).unwrap();

        let thumb = image::open(&dest).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (320, 320));
    }

    #[test]
    fn test_generate_jpeg_drops_alpha() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path(), "oak.png", 64, 64);
        let dest = dir.path().join("thumb.jpg");

        ImageThumbnailer.generate(&source, &dest, 32).unwrap();
        assert_eq!(image::open(&dest).unwrap().width(), 32);
    }

    #[test]
    fn test_generate_fails_on_bad_source() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"not a png").unwrap();

        let err = ImageThumbnailer
            .generate(&source, &dir.path().join("thumb.webp"), 320)
            .unwrap_err();
        assert!(matches!(err, Error::ThumbnailSourceFailed { .. }));
        assert!(!dir.path().join("thumb.webp").exists());
    }
}
