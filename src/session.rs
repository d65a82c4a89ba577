use macroquad::prelude::{get_time, is_key_pressed, next_frame};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::GameConfig;
use crate::food::{CellRng, MacroquadRng};
use crate::game_state::{GameView, Phase, SnakeGame};
use crate::input::{self, Command, KeyAction, WATCHED_KEYS};
use crate::log;
use crate::render;
use crate::ticker::TickScheduler;

/// One play session: the game, its scheduler and its random source.
pub struct Session<R: CellRng> {
    game: SnakeGame,
    ticker: TickScheduler,
    rng: R,
}

impl<R: CellRng> Session<R> {
    pub fn new(config: &GameConfig, mut rng: R) -> Self {
        let game = SnakeGame::new(config.grid(), &mut rng);
        let ticker = TickScheduler::new(config.step_interval_ms, config.max_steps_per_frame);
        Self { game, ticker, rng }
    }

    pub fn apply(&mut self, command: Command) {
        self.game.handle_input(command, &mut self.rng);
    }

    /// Feeds one host frame timestamp and runs the steps it makes due.
    /// Returns the number of steps actually run.
    pub fn frame(&mut self, timestamp_ms: f64) -> u32 {
        let due = self.ticker.on_frame(timestamp_ms);
        if self.game.phase() != Phase::Playing {
            self.ticker.clear();
            return 0;
        }

        let mut ran = 0;
        for _ in 0..due {
            self.game.step(&mut self.rng);
            ran += 1;
            if self.game.phase() != Phase::Playing {
                self.ticker.clear();
                break;
            }
        }
        ran
    }

    pub fn view(&self) -> GameView<'_> {
        self.game.view()
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }
}

/// Shared stop flag for a [`FrameLoop`].
#[derive(Clone, Default)]
pub struct CancelToken(Rc<std::cell::Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub struct FrameLoop {
    session: Session<MacroquadRng>,
    cell_size: f32,
    cancel: CancelToken,
}

impl FrameLoop {
    pub fn new(config: &GameConfig, cancel: CancelToken) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self {
            session: Session::new(config, MacroquadRng::seeded(seed)),
            cell_size: config.cell_size as f32,
            cancel,
        }
    }

    fn poll_input(&mut self) {
        for key in WATCHED_KEYS {
            if !is_key_pressed(key) {
                continue;
            }
            match input::action_for(key) {
                Some(KeyAction::Game(command)) => self.session.apply(command),
                Some(KeyAction::Quit) => self.cancel.cancel(),
                None => {}
            }
        }
    }

    /// Runs until the token is cancelled. Consumes the loop so the session is
    /// dropped with it on every exit path.
    pub async fn run(mut self) {
        log!("Session started");
        while !self.cancel.is_cancelled() {
            self.poll_input();
            if self.cancel.is_cancelled() {
                break;
            }
            self.session.frame(get_time() * 1000.0);
            render::draw(&self.session.view(), self.cell_size);
            next_frame().await;
        }
        log!("Session closed at score {}", self.session.game().score());
    }
}
