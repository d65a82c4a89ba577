use macroquad::prelude::*;

use crate::game_state::{GameView, Phase};
use crate::grid::Cell;

const BACKGROUND: Color = WHITE;
const GRID_LINE: Color = Color::new(0.8, 0.8, 0.8, 1.0); // #ccc
const SNAKE: Color = Color::new(0.0, 0.5, 0.0, 1.0);
const FOOD: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const TEXT: Color = BLACK;
const FONT_SIZE: f32 = 24.0;
const LINE_SPACING: f32 = 30.0;
const HUD_Y: f32 = 30.0;

/// Text payload painted over the board for each phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    StartPrompt,
    Hud { score: u32 },
    GameOver { score: u32 },
}

impl Overlay {
    pub fn for_view(view: &GameView<'_>) -> Self {
        match view.phase {
            Phase::Start => Overlay::StartPrompt,
            Phase::Playing => Overlay::Hud { score: view.score },
            Phase::Ended => Overlay::GameOver { score: view.score },
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            Overlay::StartPrompt => vec!["Press Space to play".to_string()],
            Overlay::Hud { score } => vec![format!("Score: {}", score)],
            Overlay::GameOver { score } => vec![
                "You lost!".to_string(),
                format!("Score: {}", score),
                "Press Space to play again".to_string(),
            ],
        }
    }

    /// Baseline of the first line. The HUD sits at the top, the rest are centred.
    fn first_line_y(&self, canvas_h: f32, line_count: usize) -> f32 {
        match self {
            Overlay::Hud { .. } => HUD_Y,
            _ => canvas_h * 0.5 - LINE_SPACING * (line_count as f32 - 1.0) * 0.5,
        }
    }
}

fn fill_cell(cell: Cell, cell_size: f32, color: Color) {
    draw_rectangle(
        cell.x as f32 * cell_size,
        cell.y as f32 * cell_size,
        cell_size,
        cell_size,
        color,
    );
}

fn draw_grid_lines(canvas_w: f32, canvas_h: f32, cell_size: f32) {
    let mut x = 0.0;
    while x <= canvas_w {
        draw_line(x, 0.0, x, canvas_h, 1.0, GRID_LINE);
        x += cell_size;
    }
    let mut y = 0.0;
    while y <= canvas_h {
        draw_line(0.0, y, canvas_w, y, 1.0, GRID_LINE);
        y += cell_size;
    }
}

fn draw_centered_text(text: &str, center_x: f32, y: f32) {
    let m = measure_text(text, None, FONT_SIZE as u16, 1.0);
    draw_text(text, center_x - m.width * 0.5, y + m.offset_y * 0.5, FONT_SIZE, TEXT);
}

pub fn draw(view: &GameView<'_>, cell_size: f32) {
    let sw = screen_width();
    let sh = screen_height();

    clear_background(BACKGROUND);
    draw_grid_lines(sw, sh, cell_size);

    for segment in view.snake.iter() {
        fill_cell(*segment, cell_size, SNAKE);
    }
    fill_cell(view.food, cell_size, FOOD);

    let overlay = Overlay::for_view(view);
    let lines = overlay.lines();
    let mut y = overlay.first_line_y(sh, lines.len());
    for line in &lines {
        draw_centered_text(line, sw * 0.5, y);
        y += LINE_SPACING;
    }
}
