use std::collections::VecDeque;

use crate::collision::{self, Collision};
use crate::food::{self, CellRng};
use crate::grid::{Cell, Direction, Grid};
use crate::input::Command;
use crate::log;
use crate::movement;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    Playing,
    Ended,
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Copy, Clone, Debug)]
pub struct GameView<'a> {
    pub snake: &'a VecDeque<Cell>,
    pub food: Cell,
    pub score: u32,
    pub phase: Phase,
}

pub struct SnakeGame {
    grid: Grid,
    phase: Phase,
    snake: VecDeque<Cell>,
    // Direction used by the last completed step; turns are validated against it.
    direction: Direction,
    next_direction: Direction,
    food: Cell,
    score: u32,
    last_collision: Option<Collision>,
}

impl SnakeGame {
    pub fn new(grid: Grid, rng: &mut impl CellRng) -> Self {
        let snake = VecDeque::from([grid.center()]);
        let food = Self::spawn_food(&grid, &snake, rng);
        Self {
            grid,
            phase: Phase::Start,
            snake,
            direction: Direction::Right,
            next_direction: Direction::Right,
            food,
            score: 0,
            last_collision: None,
        }
    }

    fn restart(&mut self, rng: &mut impl CellRng) {
        self.snake = VecDeque::from([self.grid.center()]);
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.food = Self::spawn_food(&self.grid, &self.snake, rng);
        self.score = 0;
        self.last_collision = None;
        self.phase = Phase::Playing;
    }

    fn spawn_food(grid: &Grid, snake: &VecDeque<Cell>, rng: &mut impl CellRng) -> Cell {
        // A fresh single-segment snake always leaves free cells on a valid grid.
        food::place_food(grid, snake, rng).unwrap_or(Cell::new(0, 0))
    }

    pub fn handle_input(&mut self, command: Command, rng: &mut impl CellRng) {
        match (self.phase, command) {
            (Phase::Playing, Command::Turn(direction)) => {
                if !direction.is_opposite(self.direction) {
                    self.next_direction = direction;
                }
            }
            (Phase::Start | Phase::Ended, Command::Begin) => {
                self.restart(rng);
                log!("Game started, food at ({}, {})", self.food.x, self.food.y);
            }
            _ => {}
        }
    }

    /// Runs one logical tick. Does nothing outside `Playing`.
    pub fn step(&mut self, rng: &mut impl CellRng) -> Option<Collision> {
        if self.phase != Phase::Playing {
            return None;
        }

        self.direction = self.next_direction;
        let ate = movement::advance(&mut self.snake, self.direction, self.food);

        if let Some(collision) = collision::detect(&self.snake, &self.grid) {
            self.phase = Phase::Ended;
            self.last_collision = Some(collision);
            log!("Game over: snake {}. Final score: {}", collision, self.score);
            return Some(collision);
        }

        if ate {
            self.score += 1;
            log!("Ate food at ({}, {}). Score: {}", self.food.x, self.food.y, self.score);
            match food::place_food(&self.grid, &self.snake, rng) {
                Some(cell) => self.food = cell,
                None => {
                    log!("No free cell left for food. Final score: {}", self.score);
                    self.phase = Phase::Ended;
                }
            }
        }
        None
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            snake: &self.snake,
            food: self.food,
            score: self.score,
            phase: self.phase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    /// Direction the next step will take.
    pub fn direction(&self) -> Direction {
        self.next_direction
    }

    pub fn last_collision(&self) -> Option<Collision> {
        self.last_collision
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, cells: &[(i32, i32)]) {
        self.snake = cells.iter().map(|&(x, y)| Cell::new(x, y)).collect();
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Cell) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.next_direction = direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::tests::ScriptedRng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playing_game(rng: &mut StdRng) -> SnakeGame {
        let mut game = SnakeGame::new(Grid::new(20, 20), rng);
        game.handle_input(Command::Begin, rng);
        game
    }

    fn has_duplicates(snake: &VecDeque<Cell>) -> bool {
        let mut seen = std::collections::HashSet::new();
        !snake.iter().all(|c| seen.insert(*c))
    }

    #[test]
    fn test_new_game_waits_in_start() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = SnakeGame::new(Grid::new(20, 20), &mut rng);
        assert_eq!(game.phase(), Phase::Start);
        assert_eq!(game.snake(), &VecDeque::from([Cell::new(10, 10)]));
        assert_ne!(game.food(), Cell::new(10, 10));

        assert_eq!(game.step(&mut rng), None);
        assert_eq!(game.snake(), &VecDeque::from([Cell::new(10, 10)]));
    }

    #[test]
    fn test_begin_then_step_right() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = playing_game(&mut rng);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake(), &VecDeque::from([Cell::new(10, 10)]));

        game.set_food(Cell::new(0, 0));
        game.step(&mut rng);
        assert_eq!(game.snake(), &VecDeque::from([Cell::new(11, 10)]));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_eating_grows_scores_and_relocates_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = playing_game(&mut rng);
        game.set_food(Cell::new(11, 10));
        game.step(&mut rng);

        assert_eq!(game.score(), 1);
        assert_eq!(game.snake().len(), 2);
        assert_eq!(game.snake()[0], Cell::new(11, 10));
        assert_ne!(game.food(), Cell::new(11, 10));
        assert!(!game.snake().contains(&game.food()));
    }

    #[test]
    fn test_reverse_turn_is_rejected() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = playing_game(&mut rng);
        game.handle_input(Command::Turn(Direction::Left), &mut rng);
        assert_eq!(game.direction(), Direction::Right);
    }

    #[test]
    fn test_two_turns_in_one_tick_cannot_reverse() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = playing_game(&mut rng);
        game.set_snake(&[(10, 10), (9, 10), (8, 10)]);
        game.set_food(Cell::new(0, 0));

        game.handle_input(Command::Turn(Direction::Up), &mut rng);
        game.handle_input(Command::Turn(Direction::Left), &mut rng);
        assert_eq!(game.direction(), Direction::Up);

        game.step(&mut rng);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.snake()[0], Cell::new(10, 9));
    }

    #[test]
    fn test_same_direction_is_noop() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut game = playing_game(&mut rng);
        let snake_before = game.snake().clone();
        let food_before = game.food();
        game.handle_input(Command::Turn(Direction::Right), &mut rng);
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.snake(), &snake_before);
        assert_eq!(game.food(), food_before);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_turns_ignored_outside_playing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = SnakeGame::new(Grid::new(20, 20), &mut rng);
        game.handle_input(Command::Turn(Direction::Up), &mut rng);
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.phase(), Phase::Start);
    }

    #[test]
    fn test_begin_ignored_while_playing() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut game = playing_game(&mut rng);
        game.set_food(Cell::new(0, 0));
        game.step(&mut rng);
        game.handle_input(Command::Begin, &mut rng);
        assert_eq!(game.snake()[0], Cell::new(11, 10));
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = playing_game(&mut rng);
        game.set_snake(&[(0, 5)]);
        game.set_direction(Direction::Left);
        game.set_food(Cell::new(10, 10));

        assert_eq!(game.step(&mut rng), Some(Collision::Wall));
        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.last_collision(), Some(Collision::Wall));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut game = playing_game(&mut rng);
        // Moving down lands the head on the segment at (5, 6).
        game.set_snake(&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]);
        game.set_direction(Direction::Down);
        game.set_food(Cell::new(0, 0));

        assert_eq!(game.step(&mut rng), Some(Collision::SelfBite));
        assert_eq!(game.phase(), Phase::Ended);
    }

    #[test]
    fn test_moving_into_vacated_tail_is_safe() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = playing_game(&mut rng);
        game.set_snake(&[(5, 5), (6, 5), (6, 6), (5, 6)]);
        game.set_direction(Direction::Down);
        game.set_food(Cell::new(0, 0));

        assert_eq!(game.step(&mut rng), None);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_ended_state_is_frozen() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut game = playing_game(&mut rng);
        game.set_snake(&[(19, 3)]);
        game.set_food(Cell::new(0, 0));
        game.step(&mut rng);
        assert_eq!(game.phase(), Phase::Ended);

        let snake = game.snake().clone();
        game.step(&mut rng);
        game.handle_input(Command::Turn(Direction::Up), &mut rng);
        assert_eq!(game.snake(), &snake);
        assert_eq!(game.food(), Cell::new(0, 0));
    }

    #[test]
    fn test_reset_from_ended() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut game = playing_game(&mut rng);
        game.set_snake(&[(0, 0), (1, 0), (2, 0)]);
        game.set_direction(Direction::Up);
        game.step(&mut rng);
        assert_eq!(game.phase(), Phase::Ended);

        game.handle_input(Command::Begin, &mut rng);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.snake(), &VecDeque::from([Cell::new(10, 10)]));
        assert_eq!(game.score(), 0);
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.last_collision(), None);
    }

    #[test]
    fn test_length_grows_only_on_food_ticks() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut game = playing_game(&mut rng);
        // Circle a 7x7 square, eating whatever food lands on the path.
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        for i in 0..400 {
            if game.phase() != Phase::Playing {
                break;
            }
            if i % 7 == 0 {
                game.handle_input(Command::Turn(turns[(i / 7) % 4]), &mut rng);
            }
            let food = game.food();
            let len_before = game.snake().len();
            let collision = game.step(&mut rng);
            let len_after = game.snake().len();
            if game.snake()[0] == food {
                assert_eq!(len_after, len_before + 1);
            } else {
                assert_eq!(len_after, len_before);
            }
            if collision.is_none() {
                assert!(!has_duplicates(game.snake()));
            }
        }
    }

    #[test]
    fn test_full_board_after_eating_ends_game() {
        let mut rng = ScriptedRng::new(&[]);
        let mut game = SnakeGame::new(Grid::new(2, 1), &mut rng);
        game.handle_input(Command::Begin, &mut rng);
        // Center of a 2x1 grid is (1, 0); head turns left onto the only free cell.
        game.set_snake(&[(1, 0)]);
        game.set_food(Cell::new(0, 0));
        game.set_direction(Direction::Left);

        assert_eq!(game.step(&mut rng), None);
        assert_eq!(game.score(), 1);
        assert_eq!(game.phase(), Phase::Ended);
    }

    #[test]
    fn test_view_reflects_state() {
        let mut rng = StdRng::seed_from_u64(15);
        let game = playing_game(&mut rng);
        let view = game.view();
        assert_eq!(view.phase, Phase::Playing);
        assert_eq!(view.score, 0);
        assert_eq!(view.food, game.food());
        assert_eq!(view.snake.len(), 1);
    }
}
