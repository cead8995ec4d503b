use std::io::{stdout, Write};

use tracing::warn;

/// Sound cues. Implementations must return quickly; the game never waits on
/// them.
pub trait AudioNotifier: Send {
    fn on_eat(&self);

    fn on_game_over(&self);
}

/// Silent mode.
pub struct Mute;

impl AudioNotifier for Mute {
    fn on_eat(&self) {}

    fn on_game_over(&self) {}
}

/// Rings the terminal bell.
pub struct Bell;

impl Bell {
    fn ring(&self, times: usize) {
        let mut out = stdout();
        let res = out.write_all(&b"\x07".repeat(times)).and_then(|_| out.flush());

        if let Err(err) = res {
            warn!(%err, "could not ring the terminal bell");
        }
    }
}

impl AudioNotifier for Bell {
    fn on_eat(&self) {
        self.ring(1);
    }

    fn on_game_over(&self) {
        self.ring(2);
    }
}

pub fn notifier(silent: bool) -> Box<dyn AudioNotifier> {
    if silent {
        Box::new(Mute)
    } else {
        Box::new(Bell)
    }
}
