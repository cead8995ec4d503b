use std::collections::VecDeque;

use crate::board::Board;
use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

const START_BODY: [Coords; 5] = [
    Coords::new(10, 7),
    Coords::new(10, 8),
    Coords::new(10, 9),
    Coords::new(10, 10),
    Coords::new(9, 10),
];

/// Direction the starting body is laid out for.
pub const START_DIRECTION: Direction = Up;

/// The snake's body, head first. Never empty and never self-overlapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coords>,
}

impl Snake {
    pub fn new() -> Self {
        Snake { body: START_BODY.iter().copied().collect() }
    }

    /// Builds a snake from an explicit head-first body. Returns `None` for an
    /// empty body or one that overlaps itself.
    pub fn from_cells<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coords>,
    {
        let mut body = VecDeque::new();
        for cell in cells {
            if body.contains(&cell) {
                return None;
            }
            body.push_back(cell);
        }

        if body.is_empty() {
            None
        } else {
            Some(Snake { body })
        }
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    pub fn next_head_position(&self, direction: Direction) -> Coords {
        let head = self.head();

        match direction {
            Up => Coords::new(head.x, head.y - 1),
            Left => Coords::new(head.x - 1, head.y),
            Right => Coords::new(head.x + 1, head.y),
            Down => Coords::new(head.x, head.y + 1),
        }
    }

    /// Whether a step in `direction` keeps the snake alive.
    ///
    /// The self-collision test runs against the body as it is before the
    /// step, so stepping onto the current tail cell counts as a crash even
    /// though the tail would have moved away.
    pub fn can_move(&self, board: &Board, direction: Direction) -> bool {
        let next = self.next_head_position(direction);

        if self.contains(next) {
            return false;
        }

        match direction {
            Up => next.y > 0,
            Left => next.x > 0,
            Right => next.x < board.width(),
            Down => next.y < board.height(),
        }
    }

    /// Steps one cell in `direction`, dropping the tail. No checks: call
    /// `can_move` first.
    pub fn move_step(&mut self, direction: Direction) {
        let new_head = self.next_head_position(direction);
        self.body.push_front(new_head);
        self.body.pop_back();
    }

    pub fn can_eat(&self, apple: Coords) -> bool {
        self.head() == apple
    }

    /// Grows onto the apple: it becomes the new head and the tail stays put.
    /// Takes the place of `move_step` on an eating tick.
    pub fn eat(&mut self, apple: Coords) {
        self.body.push_front(apple);
    }
}

impl Default for Snake {
    fn default() -> Self {
        Snake::new()
    }
}
