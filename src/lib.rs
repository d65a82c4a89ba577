pub mod collision;
pub mod config;
pub mod food;
pub mod game_state;
pub mod grid;
pub mod input;
pub mod logger;
pub mod movement;
pub mod render;
pub mod session;
pub mod ticker;

pub use collision::Collision;
pub use config::GameConfig;
pub use game_state::{GameView, Phase, SnakeGame};
pub use grid::{Cell, Direction, Grid};
pub use session::{CancelToken, FrameLoop, Session};
