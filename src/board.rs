use crate::error::{GameError, Result};
use crate::{Coords, TermInt};

/// Largest accepted wall coordinate on either axis. Keeps the status lines
/// and overlays drawn past the walls addressable.
pub const MAX_SIDE: TermInt = 1024;

/// The playing field. `width` and `height` are the coordinates of the far
/// walls; the walls themselves sit on column/row 0 and `width`/`height`.
#[derive(Clone, Debug)]
pub struct Board {
    width: TermInt,
    height: TermInt,
    cells: Vec<Coords>,
}

impl Board {
    pub fn new(width: TermInt, height: TermInt) -> Result<Self> {
        if width < 2 || height < 2 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(GameError::InvalidBoard { width, height });
        }

        let mut cells = Vec::with_capacity((width as usize - 1) * (height as usize - 1));
        for y in 1..height {
            for x in 1..width {
                cells.push(Coords::new(x, y));
            }
        }

        Ok(Board { width, height, cells })
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    /// Every interior cell, row by row. This is the universe apples are
    /// sampled from.
    pub fn all_cells(&self) -> &[Coords] {
        &self.cells
    }

    pub fn contains(&self, pos: Coords) -> bool {
        pos.x > 0 && pos.y > 0 && pos.x < self.width && pos.y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn enumerates_the_whole_interior_once() {
        let board = Board::new(50, 20).unwrap();
        let cells = board.all_cells();
        assert_eq!(cells.len(), 49 * 19);

        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), cells.len());
        assert!(cells.iter().all(|c| board.contains(*c)));
    }

    #[test]
    fn walls_are_not_playable() {
        let board = Board::new(10, 5).unwrap();
        assert!(!board.contains(Coords::new(0, 3)));
        assert!(!board.contains(Coords::new(3, 0)));
        assert!(!board.contains(Coords::new(10, 3)));
        assert!(!board.contains(Coords::new(3, 5)));
        assert!(board.contains(Coords::new(9, 4)));
        assert!(board.contains(Coords::new(1, 1)));
    }

    #[test]
    fn rejects_boards_without_interior() {
        assert!(matches!(
            Board::new(1, 20),
            Err(GameError::InvalidBoard { width: 1, height: 20 })
        ));
        assert!(Board::new(30, 0).is_err());
        assert_eq!(Board::new(2, 2).unwrap().all_cells(), &[Coords::new(1, 1)]);
    }

    #[test]
    fn rejects_oversized_boards() {
        assert!(matches!(
            Board::new(20, 65530),
            Err(GameError::InvalidBoard { width: 20, height: 65530 })
        ));
        assert!(Board::new(TermInt::MAX, 20).is_err());
        assert!(Board::new(MAX_SIDE + 1, MAX_SIDE).is_err());
        assert_eq!(Board::new(MAX_SIDE, 2).unwrap().all_cells().len(), MAX_SIDE as usize - 1);
    }
}
