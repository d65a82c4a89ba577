use std::collections::VecDeque;

use crate::grid::{Cell, Direction};

/// Advances the snake one cell in `direction`.
///
/// The new head is pushed first and the tail is only dropped when the head did not
/// land on `food`, so the body grows by exactly one segment on a food tick. Bounds
/// are not checked here. Returns `true` when the food was eaten.
pub fn advance(snake: &mut VecDeque<Cell>, direction: Direction, food: Cell) -> bool {
    let Some(&head) = snake.front() else {
        return false;
    };
    let new_head = head.neighbor(direction);
    snake.push_front(new_head);

    let ate = new_head == food;
    if !ate {
        snake.pop_back();
    }
    ate
}
