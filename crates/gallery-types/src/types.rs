use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("gallery has no images")]
    Empty,
    #[error("duplicate image id: {0}")]
    DuplicateId(String),
}

/// One image as supplied by the listing. Never mutated by the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl GalleryImage {
    pub fn new<I, S, A>(id: I, src: S, alt: A) -> Self
    where
        I: Into<String>,
        S: Into<String>,
        A: Into<String>,
    {
        Self {
            id: id.into(),
            src: src.into(),
            alt: alt.into(),
            title: None,
            width: None,
            height: None,
        }
    }


}

/// Ordered, non-empty image list with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList {
    images: Vec<GalleryImage>,
}

impl ImageList {
    pub fn new(images: Vec<GalleryImage>) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::Empty);
        }

        let mut seen = HashSet::with_capacity(images.len());
        for image in &images {
            if !seen.insert(image.id.as_str()) {
                return Err(GalleryError::DuplicateId(image.id.clone()));
            }
        }

        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    // Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.images.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.images.iter().position(|image| image.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GalleryImage> {
        self.images.iter()
    }

    pub fn as_slice(&self) -> &[GalleryImage] {
        &self.images
    }
}

impl TryFrom<Vec<GalleryImage>> for ImageList {
    type Error = GalleryError;

    fn try_from(images: Vec<GalleryImage>) -> Result<Self, Self::Error> {
        Self::new(images)
    }
}

impl std::ops::Index<usize> for ImageList {
    type Output = GalleryImage;

    fn index(&self, index: usize) -> &Self::Output {
        &self.images[index]
    }
}

impl<'a> IntoIterator for &'a ImageList {
    type Item = &'a GalleryImage;
    type IntoIter = std::slice::Iter<'a, GalleryImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str) -> GalleryImage {
        GalleryImage::new(id, format!("{id}.jpg"), format!("Photo {id}"))
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert_eq!(ImageList::new(Vec::new()), Err(GalleryError::Empty));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = ImageList::new(vec![image("a"), image("b"), image("a")]);
        assert_eq!(result, Err(GalleryError::DuplicateId("a".to_string())));
    }

    #[test]
    fn test_order_is_preserved() {
        let list = ImageList::new(vec![image("c"), image("a"), image("b")]).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.last_index(), 2);
        assert_eq!(list.position("a"), Some(1));
        assert_eq!(list[2].id, "b");
    }

    #[test]
    fn test_optional_fields_deserialize() {
        let json = r#"[
            {"id": "1", "src": "pool.jpg", "alt": "Pool"},
            {"id": "2", "src": "room.jpg", "alt": "Room", "title": "Deluxe room", "width": 1600, "height": 900}
        ]"#;

        let images: Vec<GalleryImage> = serde_json::from_str(json).unwrap();
        assert_eq!(images[0].title, None);
        assert_eq!(images[0].width, None);
        assert_eq!(images[1].title.as_deref(), Some("Deluxe room"));
        assert_eq!((images[1].width, images[1].height), (Some(1600), Some(900)));
    }
}
