use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Preview reel timing and gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Settle delay between starting and committing a slide change (default: 200).
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Duration of one slide's progress bar (default: 5000).
    #[serde(default = "default_progress_ms")]
    pub progress_ms: u64,
    /// Minimum swipe distance in gesture units, exclusive (default: 30).
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,
    /// Gesture units per terminal row (default: 16).
    #[serde(default = "default_units_per_row")]
    pub units_per_row: f32,
    /// Advance to the next slide when the progress bar fills (default: false).
    #[serde(default)]
    pub auto_advance: bool,
    /// UI tick interval in milliseconds (default: 50).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Editor limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Largest image file accepted for an image slide (default: 5 MiB).
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

/// Where saved stories go.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Output directory. Defaults to `<data dir>/storyreel`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_settle_ms() -> u64 {
    200
}

fn default_progress_ms() -> u64 {
    5000
}

fn default_swipe_threshold() -> f32 {
    30.0
}

fn default_units_per_row() -> f32 {
    16.0
}

fn default_tick_ms() -> u64 {
    50
}

fn default_max_image_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            progress_ms: default_progress_ms(),
            swipe_threshold: default_swipe_threshold(),
            units_per_row: default_units_per_row(),
            auto_advance: false,
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

impl StorageConfig {
    /// Configured directory, or `<data dir>/storyreel`.
    ///
    /// Falls back to the current directory if no data dir is available.
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storyreel")
    }
}
