use std::time::Duration;

use clap::ValueEnum;

use crate::TermInt;

pub const DEFAULT_WIDTH: TermInt = 50;
pub const DEFAULT_HEIGHT: TermInt = 20;

const EASY_INTERVAL: Duration = Duration::from_millis(300);
const NORMAL_INTERVAL: Duration = Duration::from_millis(200);

const HARD_BASE: Duration = Duration::from_millis(200);
const HARD_FLOOR: Duration = Duration::from_millis(60);
const HARD_STEP: Duration = Duration::from_millis(10);
const HARD_CHECKPOINT: u32 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Easy,
    Normal,
    /// The snake speeds up as the score grows.
    Hard,
}

impl Mode {
    pub fn speed_policy(self) -> SpeedPolicy {
        match self {
            Mode::Easy => SpeedPolicy::Fixed(EASY_INTERVAL),
            Mode::Normal => SpeedPolicy::Fixed(NORMAL_INTERVAL),
            Mode::Hard => SpeedPolicy::Ramp {
                base: HARD_BASE,
                floor: HARD_FLOOR,
                step: HARD_STEP,
                checkpoint: HARD_CHECKPOINT,
            },
        }
    }
}

/// How long a tick lasts for a given score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpeedPolicy {
    Fixed(Duration),
    /// `max(floor, base - step * score)`, only re-evaluated when the score
    /// hits a multiple of `checkpoint`.
    Ramp {
        base: Duration,
        floor: Duration,
        step: Duration,
        checkpoint: u32,
    },
}

impl SpeedPolicy {
    pub fn initial_interval(&self) -> Duration {
        match *self {
            SpeedPolicy::Fixed(interval) => interval,
            SpeedPolicy::Ramp { base, floor, .. } => base.max(floor),
        }
    }

    /// The new tick interval after reaching `score`, or `None` when the
    /// interval should be left alone.
    pub fn recompute(&self, score: u32) -> Option<Duration> {
        match *self {
            SpeedPolicy::Fixed(_) => None,
            SpeedPolicy::Ramp { base, floor, step, checkpoint } => {
                if checkpoint == 0 || score % checkpoint != 0 {
                    return None;
                }

                let faster = base.saturating_sub(step.saturating_mul(score));
                Some(faster.max(floor))
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub width: TermInt,
    pub height: TermInt,
    pub mode: Mode,
    /// Fixed seed for apple placement. Random when `None`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: Mode::Normal,
            seed: None,
        }
    }
}
