use cosmic::widget::image::Handle;
use image::RgbaImage;
use std::{
    fmt::{self, Debug, Formatter},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Unsupported locator: {0}")]
    UnsupportedLocator(String),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Task cancelled")]
    Cancelled,
}

#[derive(Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

impl Debug for LoadedImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("path", &self.path)
            .finish()
    }
}

impl LoadedImage {
    fn from_rgba(rgba: RgbaImage, path: &Path) -> Self {
        let (width, height) = rgba.dimensions();

        Self {
            handle: Handle::from_rgba(width, height, rgba.into_raw()),
            width,
            height,
            path: path.to_path_buf(),
        }
    }
}

/// Maps an image `src` to a local path. Only plain paths and `file://` URLs
/// are readable; any other scheme is rejected.
pub fn resolve_locator(src: &str) -> Result<PathBuf, LoadError> {
    if let Some(path) = src.strip_prefix("file://") {
        return Ok(PathBuf::from(path));
    }

    if src.contains("://") || src.is_empty() {
        return Err(LoadError::UnsupportedLocator(src.to_string()));
    }

    Ok(PathBuf::from(src))
}

pub async fn load_image(src: String) -> Result<LoadedImage, LoadError> {
    let (tx, rx) = tokio::sync::oneshot::channel();

    rayon::spawn(move || {
        let result = load_image_sync(&src);
        let _ = tx.send(result);
    });

    rx.await.map_err(|_| LoadError::Cancelled)?
}

pub async fn load_thumbnail(src: String, max_size: u32) -> Result<LoadedImage, LoadError> {
    let (tx, rx) = tokio::sync::oneshot::channel();

    rayon::spawn(move || {
        let result = load_thumbnail_sync(&src, max_size);
        let _ = tx.send(result);
    });

    rx.await.map_err(|_| LoadError::Cancelled)?
}

fn load_image_sync(src: &str) -> Result<LoadedImage, LoadError> {
    let path = resolve_locator(src)?;
    let rgba = decode_rgba(&path)?;
    Ok(LoadedImage::from_rgba(rgba, &path))
}

fn load_thumbnail_sync(src: &str, max_size: u32) -> Result<LoadedImage, LoadError> {
    let path = resolve_locator(src)?;
    let rgba = decode_rgba(&path)?;
    let (width, height) = rgba.dimensions();

    if width <= max_size && height <= max_size {
        return Ok(LoadedImage::from_rgba(rgba, &path));
    }

    let thumbnail = image::imageops::thumbnail(&rgba, max_size, max_size);
    Ok(LoadedImage::from_rgba(thumbnail, &path))
}

/// Decodes to RGBA8, trying zune first for the formats it handles.
pub fn decode_rgba(path: &Path) -> Result<RgbaImage, LoadError> {
    // Surface a missing file as Io rather than a decoder error
    std::fs::metadata(path)?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if is_zune_supported(&extension) {
        match decode_with_zune(path) {
            Ok(rgba) => return Ok(rgba),
            Err(err) => {
                tracing::debug!(?path, %err, "zune decode failed, falling back to image");
            }
        }
    }

    Ok(image::open(path)?.into_rgba8())
}

fn is_zune_supported(extension: &str) -> bool {
    matches!(
        extension,
        "jpg" | "jpeg" | "png" | "ppm" | "pgm" | "pbm" | "pnm" | "bmp" | "qoi" | "hdr"
    )
}

fn decode_with_zune(path: &Path) -> Result<RgbaImage, LoadError> {
    use zune_image::image::Image;

    let mut img = Image::open(path).map_err(|e| LoadError::UnsupportedFormat(e.to_string()))?;

    img.convert_color(zune_image::codecs::bmp::zune_core::colorspace::ColorSpace::RGBA)
        .map_err(|e| LoadError::UnsupportedFormat(e.to_string()))?;

    let (width, height) = img.dimensions();

    let pixels = img
        .flatten_to_u8()
        .into_iter()
        .next()
        .ok_or_else(|| LoadError::UnsupportedFormat("No pixel data".into()))?;

    RgbaImage::from_raw(width as u32, height as u32, pixels)
        .ok_or_else(|| LoadError::UnsupportedFormat("Pixel buffer size mismatch".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_file_locators() {
        assert_eq!(
            resolve_locator("/srv/listing/pool.jpg").unwrap(),
            PathBuf::from("/srv/listing/pool.jpg")
        );
        assert_eq!(
            resolve_locator("file:///srv/listing/pool.jpg").unwrap(),
            PathBuf::from("/srv/listing/pool.jpg")
        );
        assert_eq!(
            resolve_locator("photos/pool.jpg").unwrap(),
            PathBuf::from("photos/pool.jpg")
        );
    }

    #[test]
    fn test_remote_locators_rejected() {
        for src in ["https://cdn.example/pool.jpg", "http://x/y.png", ""] {
            assert!(matches!(
                resolve_locator(src),
                Err(LoadError::UnsupportedLocator(_))
            ));
        }
    }

    #[test]
    fn test_zune_formats() {
        assert!(is_zune_supported("jpg"));
        assert!(is_zune_supported("png"));
        assert!(!is_zune_supported("webp"));
    }
}
