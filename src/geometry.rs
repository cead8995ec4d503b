pub type TermInt = u16;

/// A cell on the terminal grid. Column `x`, row `y`, both zero-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coords {
    pub x: TermInt,
    pub y: TermInt,
}

impl Coords {
    pub const fn new(x: TermInt, y: TermInt) -> Self {
        Coords { x, y }
    }
}

impl From<(TermInt, TermInt)> for Coords {
    fn from((x, y): (TermInt, TermInt)) -> Self {
        Coords { x, y }
    }
}
