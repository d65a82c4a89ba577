use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;

use crate::grid::Grid;
use crate::log;

// Game constants
pub const GRID_WIDTH: i32 = 20;
pub const GRID_HEIGHT: i32 = 20;
pub const CELL_SIZE: i32 = 20;
pub const STEP_INTERVAL_MS: f64 = 150.0; // snake speed (ms per step)
pub const MAX_STEPS_PER_FRAME: u32 = 5;

pub fn config_path() -> String {
    "snake_config.json".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_size: i32,
    pub step_interval_ms: f64,
    pub max_steps_per_frame: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            step_interval_ms: STEP_INTERVAL_MS,
            max_steps_per_frame: MAX_STEPS_PER_FRAME,
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn canvas_width(&self) -> i32 {
        self.grid_width * self.cell_size
    }

    pub fn canvas_height(&self) -> i32 {
        self.grid_height * self.cell_size
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(5..=100).contains(&self.grid_width) {
            return Err("Grid width must be between 5 and 100".to_string());
        }
        if !(5..=100).contains(&self.grid_height) {
            return Err("Grid height must be between 5 and 100".to_string());
        }
        if !(4..=64).contains(&self.cell_size) {
            return Err("Cell size must be between 4 and 64".to_string());
        }
        if !(10.0..=5000.0).contains(&self.step_interval_ms) {
            return Err("Step interval must be between 10ms and 5000ms".to_string());
        }
        if !(1..=20).contains(&self.max_steps_per_frame) {
            return Err("Max steps per frame must be between 1 and 20".to_string());
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let config: GameConfig = serde_json::from_str(text)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load(path: &str) -> Result<Option<Self>, String> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file: {}", err)),
        }
    }

    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(Some(config)) => {
                log!("Loaded config from {}", path);
                config
            }
            Ok(None) => GameConfig::default(),
            Err(e) => {
                log!("{}; using defaults", e);
                GameConfig::default()
            }
        }
    }
}
