use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::error::{GameError, Result};
use crate::snake::Snake;
use crate::Coords;

/// Picks a free cell uniformly at random. Fails with `BoardFull` once the
/// snake covers the whole interior.
pub fn place_apple<R: Rng + ?Sized>(board: &Board, snake: &Snake, rng: &mut R) -> Result<Coords> {
    let choices: Vec<Coords> = board
        .all_cells()
        .iter()
        .copied()
        .filter(|pos| !snake.contains(*pos))
        .collect();

    choices.choose(rng).copied().ok_or(GameError::BoardFull)
}
