//! The two actors of a running game.
//!
//! A spawned input thread blocks on the input source and forwards requests
//! through a bounded queue. The caller's thread becomes the clock: it owns
//! the [`Game`] and the renderer, and multiplexes queued requests with ticker
//! firings, one message per iteration.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Receiver, Sender};
use tracing::{debug, info};

use crate::error::{GameError, Result};
use crate::game::{Game, Tick};
use crate::input::{InputEvent, InputSource};
use crate::render::Renderer;
use crate::snake::Direction;
use crate::state::SharedState;

/// Requests in flight between the input and clock actors. Sends block once
/// this many are waiting.
pub const REQUEST_QUEUE_CAPACITY: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Turn(Direction),
    Resync,
}

/// Plays `game` until the input source asks to quit or the renderer fails.
/// The renderer is closed before this returns, whatever the outcome.
///
/// On a renderer failure the input thread is left blocked on its source and
/// is not joined; it goes away with the process.
pub fn run<R, I>(game: Game, renderer: R, mut input: I) -> Result<()>
where
    R: Renderer,
    I: InputSource + Send + 'static,
{
    let state = game.state();
    let (requests, queue) = bounded(REQUEST_QUEUE_CAPACITY);

    // Returning from the input thread drops `requests`, which is what stops
    // the clock.
    let reader = thread::Builder::new()
        .name("input".into())
        .spawn(move || input_loop(&mut input, &state, &requests))?;

    clock_loop(game, renderer, queue)?;

    // The queue only disconnects once the input thread is done.
    reader.join().map_err(|_| GameError::InputPanicked)?
}

fn input_loop<I>(input: &mut I, state: &SharedState, requests: &Sender<Request>) -> Result<()>
where
    I: InputSource + ?Sized,
{
    loop {
        let request = match input.next_event()? {
            InputEvent::Quit => {
                info!("quit requested");
                return Ok(());
            }
            InputEvent::Confirm => {
                if state.start() {
                    info!("game started");
                }
                continue;
            }
            InputEvent::Resize => Request::Resync,
            InputEvent::Move(_) if state.is_over() => continue,
            InputEvent::Move(direction) => Request::Turn(direction),
        };

        if requests.send(request).is_err() {
            debug!("clock is gone, dropping input");
            return Ok(());
        }
    }
}

fn clock_loop<R: Renderer>(mut game: Game, mut renderer: R, queue: Receiver<Request>) -> Result<()> {
    let result = drive(&mut game, &mut renderer, &queue);
    let closed = renderer.close();
    result.and(closed)
}

fn drive<R: Renderer>(game: &mut Game, renderer: &mut R, queue: &Receiver<Request>) -> Result<()> {
    let mut ticker = tick(game.interval());
    game.render(renderer)?;

    loop {
        let rearm: Option<Duration> = select! {
            recv(queue) -> request => match request {
                Ok(Request::Turn(direction)) => {
                    game.change_direction(direction);
                    None
                }
                Ok(Request::Resync) => {
                    renderer.sync()?;
                    game.render(renderer)?;
                    None
                }
                Err(_) => {
                    debug!("input hung up, stopping clock");
                    return Ok(());
                }
            },
            recv(ticker) -> _ => {
                let speed = match game.tick() {
                    Ok(Tick::Ate { speed, .. }) => speed,
                    Ok(_) => None,
                    Err(GameError::BoardFull) => {
                        game.declare_win();
                        None
                    }
                    Err(err) => return Err(err),
                };
                game.render(renderer)?;
                speed
            },
        };

        // A fresh ticker so the next firing is a full new interval away.
        if let Some(interval) = rearm {
            debug!(?interval, "re-arming clock");
            ticker = tick(interval);
        }
    }
}
