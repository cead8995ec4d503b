use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::snake::Direction;

/// The part of the game both actors touch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub direction: Direction,
    pub started: bool,
    pub over: bool,
    pub won: bool,
    pub score: u32,
    pub speed: Duration,
}

impl GameState {
    pub fn new(direction: Direction, speed: Duration) -> Self {
        GameState { direction, started: false, over: false, won: false, score: 0, speed }
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.over
    }
}

/// Handle to the state shared between the input and clock actors. Every
/// method takes the lock, does its read or write, and lets go.
#[derive(Clone, Debug)]
pub struct SharedState {
    inner: Arc<Mutex<GameState>>,
}

impl SharedState {
    pub fn new(state: GameState) -> Self {
        SharedState { inner: Arc::new(Mutex::new(state)) }
    }

    pub fn snapshot(&self) -> GameState {
        *self.inner.lock()
    }

    /// Runs `f` with the lock held. `f` must not block.
    pub fn update<T>(&self, f: impl FnOnce(&mut GameState) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Returns `true` if this call started the game.
    pub fn start(&self) -> bool {
        self.update(|state| {
            if state.started || state.over {
                return false;
            }
            state.started = true;
            true
        })
    }

    pub fn is_over(&self) -> bool {
        self.inner.lock().over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_latches_once() {
        let shared = SharedState::new(GameState::new(Direction::Up, Duration::from_millis(200)));
        assert!(shared.start());
        assert!(!shared.start());
        assert!(shared.snapshot().is_running());
    }

    #[test]
    fn cannot_start_after_game_over() {
        let shared = SharedState::new(GameState::new(Direction::Up, Duration::from_millis(200)));
        shared.update(|s| s.over = true);
        assert!(!shared.start());
        assert!(!shared.snapshot().started);
    }

    #[test]
    fn clones_see_the_same_state() {
        let shared = SharedState::new(GameState::new(Direction::Up, Duration::from_millis(200)));
        let other = shared.clone();
        other.update(|s| s.score = 4);
        assert_eq!(shared.snapshot().score, 4);
    }
}
