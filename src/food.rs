use std::collections::HashSet;

use crate::grid::{Cell, Grid};

/// Source of uniform integers for food placement.
pub trait CellRng {
    /// Uniform value in `0..upper`.
    fn gen_below(&mut self, upper: i32) -> i32;
}

/// Uses macroquad's global generator.
#[derive(Default)]
pub struct MacroquadRng;

impl MacroquadRng {
    pub fn seeded(seed: u64) -> Self {
        macroquad::rand::srand(seed);
        Self
    }
}

impl CellRng for MacroquadRng {
    fn gen_below(&mut self, upper: i32) -> i32 {
        macroquad::rand::gen_range(0, upper)
    }
}

/// Rejection-samples a cell inside `grid` that no snake segment occupies.
///
/// Returns `None` only when the snake covers every cell of the grid; in that case
/// no sampling is attempted, so the call cannot spin forever.
pub fn place_food<'a>(
    grid: &Grid,
    snake: impl IntoIterator<Item = &'a Cell>,
    rng: &mut impl CellRng,
) -> Option<Cell> {
    let occupied: HashSet<Cell> = snake.into_iter().copied().filter(|c| grid.contains(*c)).collect();
    if occupied.len() >= grid.cell_count() {
        return None;
    }

    loop {
        let x = rng.gen_below(grid.width);
        let y = rng.gen_below(grid.height);
        let cell = Cell::new(x, y);
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
}
