//! Spoken and visible labels. Indices are 0-based on the way in and
//! rendered 1-based.

use crate::fl;

pub fn main_image(index: usize, total: usize, alt: &str, opens_lightbox: bool) -> String {
    let index = index + 1;

    if opens_lightbox {
        fl!("main-image-open", index = index, total = total, alt = alt)
    } else {
        fl!("main-image", index = index, total = total, alt = alt)
    }
}

pub fn thumbnail(index: usize, alt: &str) -> String {
    fl!("thumbnail-label", index = index + 1, alt = alt)
}

pub fn position(index: usize, total: usize) -> String {
    fl!("image-position", index = index + 1, total = total)
}

pub fn overflow(count: usize) -> String {
    fl!("overflow-count", count = count)
}
