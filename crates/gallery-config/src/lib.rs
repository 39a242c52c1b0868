use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const CONFIG_VERSION: u64 = 1;
pub const APP_ID: &str = "dev.vitrine.Gallery";

/// Shortest autoplay period accepted from the config store.
pub const MIN_AUTO_PLAY_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThumbnailSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ThumbnailSize {
    pub fn pixels(self) -> u32 {
        match self {
            ThumbnailSize::Small => 64,
            ThumbnailSize::Medium => 96,
            ThumbnailSize::Large => 128,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub show_lightbox: bool,
    pub auto_play: bool,
    pub auto_play_interval_ms: u64,
    /// Thumbnails shown in the rail before the "+N" marker.
    pub thumbnail_lead: usize,
    /// Dot indicators shown before the overflow count.
    pub max_dots: usize,
    pub thumbnail_size: ThumbnailSize,
    pub preload_radius: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            show_lightbox: true,
            auto_play: false,
            auto_play_interval_ms: 5000,
            thumbnail_lead: 10,
            max_dots: 8,
            thumbnail_size: ThumbnailSize::default(),
            preload_radius: 2,
        }
    }
}

impl GalleryConfig {
    pub fn auto_play_interval(&self) -> Duration {
        Duration::from_millis(self.auto_play_interval_ms.max(MIN_AUTO_PLAY_INTERVAL_MS))
    }
}

impl CosmicConfigEntry for GalleryConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("show_lightbox", self.show_lightbox)?;
        config.set("auto_play", self.auto_play)?;
        config.set("auto_play_interval_ms", self.auto_play_interval_ms)?;
        config.set("thumbnail_lead", self.thumbnail_lead)?;
        config.set("max_dots", self.max_dots)?;
        config.set("thumbnail_size", self.thumbnail_size)?;
        config.set("preload_radius", self.preload_radius)?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = GalleryConfig::default();

        macro_rules! get_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!("show_lightbox", show_lightbox, bool);
        get_field!("auto_play", auto_play, bool);
        get_field!("auto_play_interval_ms", auto_play_interval_ms, u64);
        get_field!("thumbnail_lead", thumbnail_lead, usize);
        get_field!("max_dots", max_dots, usize);
        get_field!("thumbnail_size", thumbnail_size, ThumbnailSize);
        get_field!("preload_radius", preload_radius, usize);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        for key in changed_keys {
            match key.as_ref() {
                "show_lightbox" => match config.get::<bool>("show_lightbox") {
                    Ok(val) => {
                        self.show_lightbox = val;
                        updated.push("show_lightbox");
                    }
                    Err(e) => errors.push(e),
                },
                "auto_play" => match config.get::<bool>("auto_play") {
                    Ok(val) => {
                        self.auto_play = val;
                        updated.push("auto_play");
                    }
                    Err(e) => errors.push(e),
                },
                "auto_play_interval_ms" => match config.get::<u64>("auto_play_interval_ms") {
                    Ok(val) => {
                        self.auto_play_interval_ms = val;
                        updated.push("auto_play_interval_ms");
                    }
                    Err(e) => errors.push(e),
                },
                "thumbnail_size" => match config.get::<ThumbnailSize>("thumbnail_size") {
                    Ok(val) => {
                        self.thumbnail_size = val;
                        updated.push("thumbnail_size");
                    }
                    Err(e) => errors.push(e),
                },
                _ => {}
            }
        }

        (errors, updated)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}
