use std::collections::VecDeque;
use std::fmt;

use crate::grid::{Cell, Grid};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "hit the wall"),
            Collision::SelfBite => write!(f, "bit itself"),
        }
    }
}

/// Checks the head of an already-moved snake against the walls, then against every
/// other segment.
pub fn detect(snake: &VecDeque<Cell>, grid: &Grid) -> Option<Collision> {
    let head = *snake.front()?;
    if !grid.contains(head) {
        return Some(Collision::Wall);
    }
    if snake.iter().skip(1).any(|c| *c == head) {
        return Some(Collision::SelfBite);
    }
    None
}
