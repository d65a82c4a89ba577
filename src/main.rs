use grid_snake::config::{self, GameConfig};
use grid_snake::log;
use grid_snake::logger::init_logger;
use grid_snake::session::{CancelToken, FrameLoop};
use macroquad::prelude::*;
use std::sync::OnceLock;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

fn game_config() -> &'static GameConfig {
    CONFIG.get_or_init(|| GameConfig::load_or_default(&config::config_path()))
}

fn window_conf() -> Conf {
    init_logger(Some("snake".to_string()));
    let config = game_config();
    Conf {
        window_title: "Snake".to_owned(),
        window_width: config.canvas_width(),
        window_height: config.canvas_height(),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = game_config();
    log!(
        "Grid {}x{} cells of {}px, one step every {}ms",
        config.grid_width,
        config.grid_height,
        config.cell_size,
        config.step_interval_ms
    );
    FrameLoop::new(config, CancelToken::new()).run().await;
}
