//! Game configuration
//!
//! One immutable value handed to every component at construction. Loaded from
//! a JSON file on native builds; any key missing from the file keeps its
//! default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Tunable dimensions, speeds and thresholds.
///
/// Distances are pixels, times are milliseconds, speeds are pixels per ms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === View ===
    /// View size (width, height)
    pub window_size: (f32, f32),
    /// Frame rate the host targets
    pub target_fps: f32,

    // === Player ===
    /// Player size (width, height)
    pub player_size: (f32, f32),
    /// Maximum rise of a single jump
    pub max_jump_height: f32,
    pub horizontal_movement_speed: f32,
    pub vertical_movement_speed: f32,
    /// Sprite frames per second for the animation cycle
    pub sprite_fps: f32,

    // === Platforms ===
    /// Platform height; widths are multiples of it
    pub platform_height: f32,
    /// Base scroll speed
    pub platform_speed: f32,
    /// Min/max platform width as a fraction of view width
    pub platform_width_fraction: (f32, f32),
    /// Platforms visited per level
    pub level_number_of_platforms: u32,
    /// Platform-height slots between two consecutive platforms
    pub skip_platform_count: u32,
    /// Live platforms in the field
    pub number_of_platforms: u32,

    // === Score ===
    /// Two increments at most this far apart activate the booster
    pub booster_threshold: f32,
    /// Booster stays on this long after its last activation
    pub booster_lifetime: f32,
    /// Points per visited platform (before multiplier)
    pub score_increment: u64,
    /// High score file (native only)
    pub score_file_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_size: (500.0, 700.0),
            target_fps: 60.0,

            player_size: (37.0, 51.0),
            max_jump_height: 150.0,
            horizontal_movement_speed: 0.5,
            vertical_movement_speed: 1.0,
            sprite_fps: 12.0,

            platform_height: 40.0,
            platform_speed: 0.04,
            platform_width_fraction: (0.2, 0.8),
            level_number_of_platforms: 5,
            skip_platform_count: 4,
            number_of_platforms: 4,

            booster_threshold: 500.0,
            booster_lifetime: 5000.0,
            score_increment: 10,
            score_file_path: "./score_data.dat".to_string(),
        }
    }
}

impl GameConfig {
    /// Nominal frame time in ms, used when the host reports a zero delta
    pub fn nominal_frame_ms(&self) -> f32 {
        1000.0 / self.target_fps
    }

    pub fn min_platform_width(&self) -> f32 {
        self.platform_width_fraction.0 * self.window_size.0
    }

    pub fn max_platform_width(&self) -> f32 {
        self.platform_width_fraction.1 * self.window_size.0
    }

    /// Check that every value is in a range the simulation can handle
    pub fn validate(&self) -> GameResult<()> {
        let (w, h) = self.window_size;
        if w <= 0.0 || h <= 0.0 {
            return Err(invalid("window_size", "both dimensions must be positive"));
        }
        if self.target_fps <= 0.0 {
            return Err(invalid("target_fps", "must be positive"));
        }
        let (pw, ph) = self.player_size;
        if pw <= 0.0 || ph <= 0.0 || pw >= w || ph >= h {
            return Err(invalid("player_size", "must be positive and fit in the window"));
        }
        if self.platform_height <= 0.0 {
            return Err(invalid("platform_height", "must be positive"));
        }
        let (lo, hi) = self.platform_width_fraction;
        if !(lo > 0.0 && lo <= hi && hi <= 1.0) {
            return Err(invalid(
                "platform_width_fraction",
                "expected 0 < min <= max <= 1",
            ));
        }
        if self.number_of_platforms == 0 {
            return Err(invalid("number_of_platforms", "must be at least 1"));
        }
        if self.skip_platform_count == 0 {
            return Err(invalid("skip_platform_count", "must be at least 1"));
        }
        if self.level_number_of_platforms == 0 {
            return Err(invalid("level_number_of_platforms", "must be at least 1"));
        }
        if self.sprite_fps <= 0.0 {
            return Err(invalid("sprite_fps", "must be positive"));
        }
        Ok(())
    }

    /// Parse and validate JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> GameResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> GameError {
    GameError::InvalidConfig { field, reason }
}
