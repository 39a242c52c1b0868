use cosmic::widget::image::Handle;
use lru::LruCache;
use shared::LoadingState;
use std::{
    collections::{HashMap, HashSet},
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};

#[derive(Clone)]
pub struct CachedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for CachedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

fn capacity(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).unwrap_or(NonZeroUsize::MIN)
}

/// Decoded images keyed by gallery image id.
///
/// Failures are remembered per id and never retried for the life of the cache.
#[derive(Clone)]
pub struct ImageCache {
    full_images: Arc<Mutex<LruCache<String, CachedImage>>>,
    thumbnails: Arc<Mutex<LruCache<String, CachedImage>>>,
    pending: Arc<Mutex<HashSet<String>>>,
    pending_thumbnails: Arc<Mutex<HashSet<String>>>,
    failed: Arc<Mutex<HashMap<String, String>>>,
    failed_thumbnails: Arc<Mutex<HashMap<String, String>>>,
}

impl ImageCache {
    pub fn new(full_capacity: usize, thumbnail_capacity: usize) -> Self {
        Self {
            full_images: Arc::new(Mutex::new(LruCache::new(capacity(full_capacity)))),
            thumbnails: Arc::new(Mutex::new(LruCache::new(capacity(thumbnail_capacity)))),
            pending: Arc::new(Mutex::new(HashSet::new())),
            pending_thumbnails: Arc::new(Mutex::new(HashSet::new())),
            failed: Arc::new(Mutex::new(HashMap::new())),
            failed_thumbnails: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(10, 200)
    }

    pub fn get_full(&self, id: &str) -> Option<CachedImage> {
        self.full_images.lock().ok()?.get(id).cloned()
    }

    pub fn insert_full(&self, id: String, image: CachedImage) {
        self.clear_pending(&id);

        if let Ok(mut cache) = self.full_images.lock() {
            cache.put(id, image);
        }
    }

    pub fn get_thumbnail(&self, id: &str) -> Option<CachedImage> {
        self.thumbnails.lock().ok()?.get(id).cloned()
    }

    pub fn insert_thumbnail(&self, id: String, image: CachedImage) {
        self.clear_pending_thumbnail(&id);

        if let Ok(mut cache) = self.thumbnails.lock() {
            cache.put(id, image);
        }
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending
            .lock()
            .map(|set| set.contains(id))
            .unwrap_or(false)
    }

    pub fn set_pending(&self, id: String) {
        if let Ok(mut set) = self.pending.lock() {
            set.insert(id);
        }
    }

    pub fn clear_pending(&self, id: &str) {
        if let Ok(mut set) = self.pending.lock() {
            set.remove(id);
        }
    }

    pub fn is_thumbnail_pending(&self, id: &str) -> bool {
        self.pending_thumbnails
            .lock()
            .map(|set| set.contains(id))
            .unwrap_or(false)
    }

    pub fn set_thumbnail_pending(&self, id: String) {
        if let Ok(mut set) = self.pending_thumbnails.lock() {
            set.insert(id);
        }
    }

    pub fn clear_pending_thumbnail(&self, id: &str) {
        if let Ok(mut set) = self.pending_thumbnails.lock() {
            set.remove(id);
        }
    }

    /// Records a failed decode of the full image. Clears both pending marks.
    pub fn mark_failed(&self, id: String, error: String) {
        self.clear_pending(&id);
        self.clear_pending_thumbnail(&id);

        if let Ok(mut failed) = self.failed.lock() {
            failed.insert(id, error);
        }
    }

    /// Records a failed thumbnail decode. The full-size slot is untouched.
    pub fn mark_thumbnail_failed(&self, id: String, error: String) {
        self.clear_pending_thumbnail(&id);

        if let Ok(mut failed) = self.failed_thumbnails.lock() {
            failed.insert(id, error);
        }
    }

    pub fn error(&self, id: &str) -> Option<String> {
        self.failed.lock().ok()?.get(id).cloned()
    }

    fn thumbnail_error(&self, id: &str) -> Option<String> {
        self.failed_thumbnails.lock().ok()?.get(id).cloned()
    }

    /// Loading state of the full-size slot for `id`.
    pub fn state(&self, id: &str) -> LoadingState {
        if let Some(error) = self.error(id) {
            LoadingState::Error(error)
        } else if self.is_pending(id) {
            LoadingState::Loading
        } else if self
            .full_images
            .lock()
            .map(|cache| cache.contains(id))
            .unwrap_or(false)
        {
            LoadingState::Ready
        } else {
            LoadingState::Idle
        }
    }

    /// Loading state of the rail thumbnail for `id`. A failed full-size
    /// decode fails the thumbnail too.
    pub fn thumbnail_state(&self, id: &str) -> LoadingState {
        if let Some(error) = self.thumbnail_error(id).or_else(|| self.error(id)) {
            LoadingState::Error(error)
        } else if self.is_thumbnail_pending(id) {
            LoadingState::Loading
        } else if self
            .thumbnails
            .lock()
            .map(|cache| cache.contains(id))
            .unwrap_or(false)
        {
            LoadingState::Ready
        } else {
            LoadingState::Idle
        }
    }

    /// Claims the full-size slot for decoding. False if it is cached, in
    /// flight, or has already failed.
    pub fn begin_load(&self, id: &str) -> bool {
        if !self.state(id).should_load() {
            return false;
        }

        self.set_pending(id.to_string());
        true
    }

    /// Claims the thumbnail slot for decoding.
    pub fn begin_thumbnail_load(&self, id: &str) -> bool {
        if !self.thumbnail_state(id).should_load() {
            return false;
        }

        self.set_thumbnail_pending(id.to_string());
        true
    }

    pub fn clear(&self) {
        if let Ok(mut cache) = self.full_images.lock() {
            cache.clear();
        }

        if let Ok(mut cache) = self.thumbnails.lock() {
            cache.clear();
        }

        if let Ok(mut set) = self.pending.lock() {
            set.clear();
        }

        if let Ok(mut set) = self.pending_thumbnails.lock() {
            set.clear();
        }

        if let Ok(mut failed) = self.failed.lock() {
            failed.clear();
        }

        if let Ok(mut failed) = self.failed_thumbnails.lock() {
            failed.clear();
        }
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}
