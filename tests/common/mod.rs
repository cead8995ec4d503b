use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use parking_lot::Mutex;

use termsnake::input::{InputEvent, InputSource};
use termsnake::render::{Renderer, Style};
use termsnake::{GameError, Result, TermInt};

/// Plays back input events, each after a delay. Quits once the script runs
/// out.
pub struct Script {
    steps: VecDeque<(Duration, InputEvent)>,
}

impl Script {
    pub fn new(steps: &[(u64, InputEvent)]) -> Self {
        Script {
            steps: steps
                .iter()
                .map(|&(ms, event)| (Duration::from_millis(ms), event))
                .collect(),
        }
    }
}

impl InputSource for Script {
    fn next_event(&mut self) -> Result<InputEvent> {
        match self.steps.pop_front() {
            Some((delay, event)) => {
                sleep(delay);
                Ok(event)
            }
            None => Ok(InputEvent::Quit),
        }
    }
}

#[derive(Default)]
pub struct Log {
    pub frames: Vec<HashMap<(TermInt, TermInt), char>>,
    pub syncs: usize,
    pub closed: bool,
}

impl Log {
    pub fn last_frame(&self) -> &HashMap<(TermInt, TermInt), char> {
        self.frames.last().expect("nothing was presented")
    }
}

/// Keeps every presented frame so tests can look at what the player saw.
#[derive(Default)]
pub struct Recorder {
    pending: HashMap<(TermInt, TermInt), char>,
    pub log: Arc<Mutex<Log>>,
    pub fail_present: bool,
}

impl Recorder {
    pub fn new() -> (Self, Arc<Mutex<Log>>) {
        let recorder = Recorder::default();
        let log = recorder.log.clone();
        (recorder, log)
    }
}

impl Renderer for Recorder {
    fn clear(&mut self) -> Result<()> {
        self.pending.clear();
        Ok(())
    }

    fn draw_cell(&mut self, x: TermInt, y: TermInt, glyph: char, _style: Style) -> Result<()> {
        self.pending.insert((x, y), glyph);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.fail_present {
            return Err(GameError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away")));
        }
        self.log.lock().frames.push(self.pending.clone());
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.log.lock().syncs += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.log.lock().closed = true;
        Ok(())
    }
}
