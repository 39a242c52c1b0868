use gallery_image::{LoadError, load_image, load_thumbnail, loader::decode_rgba};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([200, 120, 40, 255]))
        .save(path)
        .unwrap();
}

#[tokio::test]
async fn test_load_full_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terrace.png");
    write_png(&path, 300, 200);

    let loaded = load_image(path.to_string_lossy().into_owned()).await.unwrap();

    assert_eq!((loaded.width, loaded.height), (300, 200));
    assert_eq!(loaded.path, path);
}

#[tokio::test]
async fn test_file_url_and_thumbnail_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kitchen.png");
    write_png(&path, 400, 100);

    let src = format!("file://{}", path.display());
    let thumb = load_thumbnail(src, 96).await.unwrap();

    assert!(thumb.width <= 96 && thumb.height <= 96);
    assert_eq!(thumb.width, 96);
}

#[tokio::test]
async fn test_small_image_is_not_upscaled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");
    write_png(&path, 40, 30);

    let thumb = load_thumbnail(path.to_string_lossy().into_owned(), 96)
        .await
        .unwrap();

    assert_eq!((thumb.width, thumb.height), (40, 30));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("gone.png").to_string_lossy().into_owned();

    assert!(matches!(load_image(src).await, Err(LoadError::Io(_))));
}

#[tokio::test]
async fn test_remote_source_is_rejected() {
    let result = load_image("https://cdn.example/pool.jpg".into()).await;
    assert!(matches!(result, Err(LoadError::UnsupportedLocator(_))));
}

#[test]
fn test_garbage_bytes_fail_to_decode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png").unwrap();

    assert!(decode_rgba(&path).is_err());
}
