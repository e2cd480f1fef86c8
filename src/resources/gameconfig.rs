//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! vsync = true
//! target_fps = 60
//!
//! [carousel]
//! shift_speed = 5.0
//! selected_scale = 3.0
//! default_scale = 1.5
//! settle_distance = 0.5
//! spin_speed = 30.0
//!
//! [assets]
//! stages = ./assets/stages.json
//! save = ./assets/save.json
//! cursor_fx = ./assets/audio/cursor.wav
//! music = ./assets/audio/menu.xm
//! ```

use crate::components::carousel::{
    CarouselTuning, DEFAULT_SELECTED_SCALE, DEFAULT_SETTLE_DISTANCE, DEFAULT_SHIFT_SPEED,
    DEFAULT_SPIN_SPEED, DEFAULT_UNSELECTED_SCALE,
};
use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_STAGES_PATH: &str = "./assets/stages.json";
const DEFAULT_SAVE_PATH: &str = "./assets/save.json";
const DEFAULT_CURSOR_FX_PATH: &str = "./assets/audio/cursor.wav";

/// `None` when `[assets] key` is absent, `Some(None)` when it is present
/// without a value.
fn optional_path(config: &Ini, key: &str) -> Option<Option<PathBuf>> {
    let value = config.get_map_ref().get("assets")?.get(key)?;
    Some(
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from),
    )
}

/// Game configuration resource.
///
/// Stores window settings, carousel tuning and asset paths. Changes made at
/// runtime are applied by [`apply_gameconfig_changes`].
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Easing rate of carousel positions and scales.
    pub shift_speed: f32,
    /// Scale of the selected stage.
    pub selected_scale: f32,
    /// Scale of the other stages.
    pub default_scale: f32,
    /// Distance under which a shift counts as finished.
    pub settle_distance: f32,
    /// Turn rate of stage models in degrees per second.
    pub spin_speed: f32,
    /// Stage database JSON.
    pub stages_path: PathBuf,
    /// Save data JSON.
    pub save_path: PathBuf,
    /// Cursor move sound effect.
    pub cursor_fx_path: Option<PathBuf>,
    /// Looping background music.
    pub music_path: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            shift_speed: DEFAULT_SHIFT_SPEED,
            selected_scale: DEFAULT_SELECTED_SCALE,
            default_scale: DEFAULT_UNSELECTED_SCALE,
            settle_distance: DEFAULT_SETTLE_DISTANCE,
            spin_speed: DEFAULT_SPIN_SPEED,
            stages_path: PathBuf::from(DEFAULT_STAGES_PATH),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            cursor_fx_path: Some(PathBuf::from(DEFAULT_CURSOR_FX_PATH)),
            music_path: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, shift_speed={}, stages={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.shift_speed,
            self.stages_path
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [carousel] section
        let positive = |key: &str| {
            config
                .getfloat("carousel", key)
                .ok()
                .flatten()
                .filter(|v| *v > 0.0)
                .map(|v| v as f32)
        };
        if let Some(v) = positive("shift_speed") {
            self.shift_speed = v;
        }
        if let Some(v) = positive("selected_scale") {
            self.selected_scale = v;
        }
        if let Some(v) = positive("default_scale") {
            self.default_scale = v;
        }
        if let Some(v) = positive("settle_distance") {
            self.settle_distance = v;
        }
        if let Some(v) = config.getfloat("carousel", "spin_speed").ok().flatten() {
            self.spin_speed = v as f32;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "stages") {
            self.stages_path = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "save") {
            self.save_path = PathBuf::from(path);
        }
        // A present but empty key turns the sound off.
        if let Some(path) = optional_path(config, "cursor_fx") {
            self.cursor_fx_path = path;
        }
        if let Some(path) = optional_path(config, "music") {
            self.music_path = path;
        }
    }

    /// Carousel animation parameters derived from this configuration.
    pub fn carousel_tuning(&self) -> CarouselTuning {
        CarouselTuning {
            shift_speed: self.shift_speed,
            selected_scale: self.selected_scale,
            default_scale: self.default_scale,
            settle_distance: self.settle_distance,
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
