use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::apple::place_apple;
use crate::audio::AudioNotifier;
use crate::board::Board;
use crate::config::{GameConfig, SpeedPolicy};
use crate::error::{GameError, Result};
use crate::render::{draw_frame, draw_text, Renderer, Style};
use crate::snake::{Direction, Snake, START_DIRECTION};
use crate::state::{GameState, SharedState};
use crate::Coords;
use Direction::*;

const SNAKE_BODY_CHAR: char = '▒';
const APPLE_CHAR: char = '●';
const DEAD_SNAKE_CHAR: char = 'X';

const START_MESSAGE: &str = "PRESS <ENTER> TO CONTINUE";

/// What a single clock tick did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Not started yet, or already over.
    Idle,
    Moved,
    /// The apple was eaten. `speed` is set when the tick interval changed.
    Ate { score: u32, speed: Option<Duration> },
    Crashed,
}

/// Accepts any change except a no-op or a 180° turn into the snake's neck.
pub fn should_update_direction(current: Direction, requested: Direction) -> bool {
    requested != current && requested != current.opposite()
}

pub struct Game {
    board: Board,
    snake: Snake,
    apple: Option<Coords>,
    state: SharedState,
    policy: SpeedPolicy,
    rng: StdRng,
    audio: Box<dyn AudioNotifier>,
}

impl Game {
    pub fn new(config: &GameConfig, audio: Box<dyn AudioNotifier>) -> Result<Self> {
        Game::with_snake(config, Snake::new(), START_DIRECTION, audio)
    }

    /// Starts from a custom snake heading in `direction` instead of the
    /// standard opening.
    pub fn with_snake(
        config: &GameConfig,
        snake: Snake,
        direction: Direction,
        audio: Box<dyn AudioNotifier>,
    ) -> Result<Self> {
        let board = Board::new(config.width, config.height)?;

        if !snake.body().iter().all(|pos| board.contains(*pos)) {
            return Err(GameError::SnakeOutOfBounds { width: config.width, height: config.height });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let apple = place_apple(&board, &snake, &mut rng)?;

        let policy = config.mode.speed_policy();
        let state = SharedState::new(GameState::new(direction, policy.initial_interval()));

        info!(
            width = board.width(),
            height = board.height(),
            mode = ?config.mode,
            "new game"
        );

        Ok(Game { board, snake, apple: Some(apple), state, policy, rng, audio })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Option<Coords> {
        self.apple
    }

    /// A handle for the other actor.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    pub fn interval(&self) -> Duration {
        self.state.snapshot().speed
    }

    /// Applies `requested` if it is a legal turn. The snake only follows it
    /// on the next tick.
    pub fn change_direction(&self, requested: Direction) -> bool {
        let accepted = self.state.update(|state| {
            if !should_update_direction(state.direction, requested) {
                return false;
            }
            state.direction = requested;
            true
        });

        debug!(?requested, accepted, "direction change");
        accepted
    }

    pub fn tick(&mut self) -> Result<Tick> {
        let GameState { direction, score, .. } = match self.state.snapshot() {
            state if state.is_running() => state,
            _ => return Ok(Tick::Idle),
        };

        if !self.snake.can_move(&self.board, direction) {
            self.state.update(|state| state.over = true);
            info!(score, head = ?self.snake.head(), ?direction, "snake crashed");
            self.audio.on_game_over();
            return Ok(Tick::Crashed);
        }

        match self.apple {
            Some(apple) if self.snake.next_head_position(direction) == apple => self.snake.eat(apple),
            _ => self.snake.move_step(direction),
        }

        let eaten = match self.apple {
            Some(apple) if self.snake.can_eat(apple) => apple,
            _ => return Ok(Tick::Moved),
        };

        let policy = self.policy;
        let (score, speed) = self.state.update(|state| {
            state.score += 1;
            let speed = policy.recompute(state.score);
            if let Some(speed) = speed {
                state.speed = speed;
            }
            (state.score, speed)
        });

        debug!(?eaten, score, ?speed, "apple eaten");
        self.audio.on_eat();

        self.apple = None;
        self.apple = Some(place_apple(&self.board, &self.snake, &mut self.rng)?);

        Ok(Tick::Ate { score, speed })
    }

    /// Ends the game as a win. Used when no free cell is left for an apple.
    pub fn declare_win(&self) {
        self.state.update(|state| {
            state.over = true;
            state.won = true;
        });
        info!(length = self.snake.len(), "board filled up");
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<()> {
        let state = self.state.snapshot();

        renderer.clear()?;
        if !state.started {
            self.draw_loading(renderer)?;
        }
        if let Some(apple) = self.apple {
            renderer.draw_cell(apple.x, apple.y, APPLE_CHAR, Style::Apple)?;
        }
        self.draw_board(renderer, &state)?;
        self.draw_snake(renderer, &state)?;
        if state.over {
            self.draw_ending(renderer, &state)?;
        }
        renderer.present()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_loading<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<()> {
        let (cx, cy) = (self.board.width() / 2, self.board.height() / 2);
        draw_text(renderer, (cx.saturating_sub(12), cy), (cx + 13, cy), START_MESSAGE)
    }

    fn draw_ending<R: Renderer + ?Sized>(&self, renderer: &mut R, state: &GameState) -> Result<()> {
        let (cx, cy) = (self.board.width() / 2, self.board.height() / 2);
        let msg = if state.won { "You won!" } else { "Game over" };
        draw_text(renderer, (cx.saturating_sub(5), cy), (cx + 10, cy), msg)
    }

    fn draw_board<R: Renderer + ?Sized>(&self, renderer: &mut R, state: &GameState) -> Result<()> {
        let (width, height) = (self.board.width(), self.board.height());

        draw_frame(renderer, width, height)?;

        let limit = (width, height + 10);
        draw_text(renderer, (1, height + 1), limit, &format!("Score:{}", state.score))?;
        draw_text(renderer, (1, height + 3), limit, "Press ESC or Ctrl+C to quit")?;
        draw_text(renderer, (1, height + 4), limit, "Press arrow keys to control direction")
    }

    fn draw_snake<R: Renderer + ?Sized>(&self, renderer: &mut R, state: &GameState) -> Result<()> {
        for (i, pos) in self.snake.body().iter().enumerate() {
            let ch = if state.over && !state.won {
                DEAD_SNAKE_CHAR
            } else if i == 0 {
                head_char(state.direction)
            } else {
                SNAKE_BODY_CHAR
            };
            renderer.draw_cell(pos.x, pos.y, ch, Style::Snake)?;
        }

        Ok(())
    }
}

fn head_char(direction: Direction) -> char {
    match direction {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
    }
}
