//! Procedural platform field
//!
//! Platforms are spawned at the top of the view, drift down while the field
//! scrolls, and are replaced one-for-one once they leave the bottom.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// A horizontal platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub rect: Rect,
    /// Set once the player has landed on it; never cleared
    pub visited: bool,
}

impl Platform {
    pub fn new(id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, width, height),
            visited: false,
        }
    }

    /// Mark visited. Returns true only on the first call.
    pub fn visit(&mut self) -> bool {
        if self.visited {
            return false;
        }
        self.visited = true;
        true
    }
}

/// The set of live platforms plus the generator that places new ones
#[derive(Debug, Clone)]
pub struct PlatformField {
    platforms: Vec<Platform>,
    rng: Pcg32,
    /// Edge-aligned (true) or centered (false) for the next placement
    side: bool,
    /// Left edge (true) or right edge (false) for the next edge placement
    side_left: bool,
    scrolling: bool,
    view: (f32, f32),
    platform_height: f32,
    min_width: f32,
    max_width: f32,
    base_speed: f32,
    count: usize,
    skip: u32,
    next_id: u32,
}

impl PlatformField {
    /// Create an empty field. Call [`PlatformField::initialize`] to populate it.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let side = rng.random_bool(0.5);
        let side_left = rng.random_bool(0.5);
        // Inverted fractions in an unvalidated config must not empty the range
        let (a, b) = (config.min_platform_width(), config.max_platform_width());
        Self {
            platforms: Vec::with_capacity(config.number_of_platforms as usize),
            rng,
            side,
            side_left,
            scrolling: false,
            view: config.window_size,
            platform_height: config.platform_height,
            min_width: a.min(b),
            max_width: a.max(b),
            base_speed: config.platform_speed,
            count: config.number_of_platforms as usize,
            skip: config.skip_platform_count,
            next_id: 1,
        }
    }

    /// Place the initial platforms, evenly spaced down the view.
    ///
    /// Only acts on an empty field.
    pub fn initialize(&mut self) {
        if !self.platforms.is_empty() {
            return;
        }
        for n in 0..self.count as u32 {
            let slot = 1 + n * self.skip;
            let y = slot as f32 * self.platform_height;
            self.spawn(y);
        }
        log::debug!("Platform field initialized with {} platforms", self.platforms.len());
    }

    /// Scroll all platforms down and recycle the ones that left the view
    pub fn step(&mut self, delta: f32, speed_multiplier: f32) {
        if !self.scrolling {
            return;
        }
        let dy = self.base_speed * speed_multiplier * delta;
        for platform in &mut self.platforms {
            platform.rect.pos.y += dy;
        }

        let before = self.platforms.len();
        let view_height = self.view.1;
        self.platforms.retain(|p| p.rect.top() < view_height);
        let removed = before - self.platforms.len();
        for _ in 0..removed {
            self.spawn(self.platform_height);
        }
    }

    pub fn set_scrolling(&mut self, scrolling: bool) {
        if scrolling && !self.scrolling {
            log::debug!("Platform field started scrolling");
        }
        self.scrolling = scrolling;
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platforms_mut(&mut self) -> &mut [Platform] {
        &mut self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Add a platform at the given y with a random width and alternating side
    fn spawn(&mut self, y: f32) {
        let width = self.random_width();
        let x = if self.side {
            let x = if self.side_left {
                0.0
            } else {
                self.view.0 - width
            };
            self.side_left = !self.side_left;
            x
        } else {
            self.view.0 / 2.0 - width / 2.0
        };
        self.side = !self.side;

        let id = self.next_id;
        self.next_id += 1;
        self.platforms
            .push(Platform::new(id, x, y, width, self.platform_height));
    }

    /// Uniform width in [min, max], snapped to a whole number of tiles
    fn random_width(&mut self) -> f32 {
        let raw = if self.min_width < self.max_width {
            self.rng.random_range(self.min_width..=self.max_width)
        } else {
            self.min_width
        };
        let tile = self.platform_height;
        let mut width = (raw / tile).ceil() * tile;
        if width > self.max_width {
            width = (raw / tile).floor() * tile;
        }
        if width < self.min_width {
            // Range narrower than one tile; no tiled width fits
            width = self.max_width;
        }
        width.min(self.view.0)
    }
}
