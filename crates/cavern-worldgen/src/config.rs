//! Generator configuration.
//!
//! Configuration can be loaded from and saved to a TOML file. Non-positive
//! values are replaced by defaults when a generator is built from it.

use std::fs;
use std::path::Path;

use cavern_common::{CavernError, CavernResult, Viewport};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::instantiate::BossPolicy;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "cavern.toml";

/// Default world grid width in room cells.
pub const DEFAULT_WIDTH: i32 = 15;
/// Default world grid height in room cells.
pub const DEFAULT_HEIGHT: i32 = 10;
/// Default target room count.
pub const DEFAULT_ROOM_COUNT: i32 = 80;
/// Default number of biomes.
pub const DEFAULT_BIOME_COUNT: i32 = 5;
/// Default number of shortcut edges.
pub const DEFAULT_SHORTCUT_COUNT: i32 = 3;
/// Largest biome count; biome IDs are 16-bit.
pub const MAX_BIOME_COUNT: i32 = u16::MAX as i32;
/// Smallest layout viewport width. Fits the widest platform and the
/// emergency platforms.
pub const MIN_VIEWPORT_WIDTH: f32 = 640.0;
/// Smallest layout viewport height.
pub const MIN_VIEWPORT_HEIGHT: f32 = 480.0;

/// World generator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// World grid width in room cells
    pub width: i32,
    /// World grid height in room cells
    pub height: i32,
    /// Target total room count
    pub room_count: i32,
    /// Number of biomes, assigned by depth
    pub biome_count: i32,
    /// Backtracking edges to add (0 disables)
    pub shortcut_count: i32,
    /// Which nodes become boss rooms
    pub boss_policy: BossPolicy,
    /// Layout viewport width in pixels
    pub viewport_width: f32,
    /// Layout viewport height in pixels
    pub viewport_height: f32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            room_count: DEFAULT_ROOM_COUNT,
            biome_count: DEFAULT_BIOME_COUNT,
            shortcut_count: DEFAULT_SHORTCUT_COUNT,
            boss_policy: BossPolicy::default(),
            viewport_width: viewport.width,
            viewport_height: viewport.height,
        }
    }
}

impl WorldGenConfig {
    /// Load configuration from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                },
                Err(e) => {
                    warn!("Failed to parse config file: {e}");
                    Self::default()
                },
            },
            Err(e) => {
                warn!("Failed to read config file: {e}");
                Self::default()
            },
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> CavernResult<Self> {
        toml::from_str(contents).map_err(|e| CavernError::Config(e.to_string()))
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> CavernResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CavernError::Serialization(e.to_string()))?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replaces non-positive values with their defaults and clamps the biome
    /// count and viewport into their supported ranges.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fallback = |value: i32, default: i32| if value > 0 { value } else { default };
        self.width = fallback(self.width, defaults.width);
        self.height = fallback(self.height, defaults.height);
        self.room_count = fallback(self.room_count, defaults.room_count);
        self.biome_count = fallback(self.biome_count, defaults.biome_count).min(MAX_BIOME_COUNT);
        self.shortcut_count = self.shortcut_count.max(0);
        let invalid = |v: f32| !v.is_finite() || v <= 0.0;
        if invalid(self.viewport_width) || invalid(self.viewport_height) {
            self.viewport_width = defaults.viewport_width;
            self.viewport_height = defaults.viewport_height;
        }
        self.viewport_width = self.viewport_width.max(MIN_VIEWPORT_WIDTH);
        self.viewport_height = self.viewport_height.max(MIN_VIEWPORT_HEIGHT);
        self
    }

    /// Layout viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }
}
