//! Image sources that hand the gallery its list once at mount.

use gallery_types::GalleryImage;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::task::spawn_blocking;

pub const EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "ico", "avif",
];

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Not a manifest or directory: {0}")]
    Unsupported(PathBuf),
    #[error("Task cancelled")]
    Cancelled,
}

/// Loads a `.json` manifest or scans a directory of images.
pub async fn load_source(path: PathBuf) -> Result<Vec<GalleryImage>, SourceError> {
    spawn_blocking(move || load_source_sync(&path))
        .await
        .map_err(|_| SourceError::Cancelled)?
}

pub fn load_source_sync(path: &Path) -> Result<Vec<GalleryImage>, SourceError> {
    if path.is_dir() {
        return scan_dir_sync(path);
    }

    let is_manifest = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_manifest {
        read_manifest(path)
    } else {
        Err(SourceError::Unsupported(path.to_path_buf()))
    }
}

/// Parses a JSON array of images. Relative `src` entries resolve against the
/// manifest's own directory.
pub fn read_manifest(path: &Path) -> Result<Vec<GalleryImage>, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut images: Vec<GalleryImage> =
        serde_json::from_str(&content).map_err(|source| SourceError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(base) = path.parent() {
        for image in &mut images {
            if is_relative_path(&image.src) {
                image.src = base.join(&image.src).to_string_lossy().into_owned();
            }
        }
    }

    Ok(images)
}

fn is_relative_path(src: &str) -> bool {
    !src.contains("://") && Path::new(src).is_relative()
}

fn scan_dir_sync(dir: &Path) -> Result<Vec<GalleryImage>, SourceError> {
    let entries = fs::read_dir(dir).map_err(|source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            if let Some(name) = path.file_name().and_then(|name| name.to_str())
                && name.starts_with('.')
            {
                return false;
            }
            is_supported_image(path)
        })
        .collect();

    paths.sort_by(|a, b| {
        let a_name = a.file_name().and_then(|name| name.to_str()).unwrap_or("");
        let b_name = b.file_name().and_then(|name| name.to_str()).unwrap_or("");
        human_sort(a_name, b_name)
    });

    Ok(paths.iter().filter_map(|path| image_from_path(path)).collect())
}

fn image_from_path(path: &Path) -> Option<GalleryImage> {
    let id = path.file_name()?.to_str()?.to_string();
    let stem = path.file_stem()?.to_str()?;

    Some(GalleryImage::new(
        id,
        path.to_string_lossy(),
        humanize(stem),
    ))
}

/// `pool_at-dusk` becomes `Pool at dusk`.
pub fn humanize(stem: &str) -> String {
    let spaced: String = stem
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    let spaced = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Natural ordering: `img2` sorts before `img10`.
pub fn human_sort(a: &str, b: &str) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) => {
                if ac.is_ascii_digit() && bc.is_ascii_digit() {
                    let a_num = take_number(&mut a_chars);
                    let b_num = take_number(&mut b_chars);

                    match a_num.cmp(&b_num) {
                        Ordering::Equal => continue,
                        other => return other,
                    }
                }

                a_chars.next();
                b_chars.next();
                let ac = ac.to_lowercase().next().unwrap_or(ac);
                let bc = bc.to_lowercase().next().unwrap_or(bc);

                match ac.cmp(&bc) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u64 {
    let mut value: u64 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(digit as u64);
        chars.next();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_human_sort_orders_numbers_numerically() {
        assert_eq!(human_sort("room2.jpg", "room10.jpg"), Ordering::Less);
        assert_eq!(human_sort("Room1.jpg", "room1.jpg"), Ordering::Equal);
        assert_eq!(human_sort("b.jpg", "a.jpg"), Ordering::Greater);
        assert_eq!(human_sort("a", "ab"), Ordering::Less);
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("pool_at-dusk"), "Pool at dusk");
        assert_eq!(humanize("__"), "");
    }

    #[test]
    fn test_relative_detection() {
        assert!(is_relative_path("photos/a.jpg"));
        assert!(!is_relative_path("/srv/a.jpg"));
        assert!(!is_relative_path("https://cdn.example/a.jpg"));
    }
}
