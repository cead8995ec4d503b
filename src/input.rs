use crate::error::Result;
use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Confirm,
    Move(Direction),
    Resize,
}

/// Blocking stream of already-classified input events.
pub trait InputSource {
    fn next_event(&mut self) -> Result<InputEvent>;
}
