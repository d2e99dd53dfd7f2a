use std::io::Write;

use crate::game::Cue;

/// Receiver for the game's sound cues.
///
/// Playback is best-effort: an implementation must swallow its own
/// failures rather than interrupt the game.
pub trait AudioSink {
    fn play_eat(&mut self);

    fn play_game_over(&mut self);

    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Eat => self.play_eat(),
            Cue::GameOver => self.play_game_over(),
        }
    }
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play_eat(&mut self) {
        (**self).play_eat();
    }

    fn play_game_over(&mut self) {
        (**self).play_game_over();
    }
}

/// Rings the terminal bell once per cue
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self, cue: &str) {
        let result = self
            .out
            .write_all(b"\x07")
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::debug!(cue, error = %e, "dropped audio cue");
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play_eat(&mut self) {
        self.ring("eat");
    }

    fn play_game_over(&mut self) {
        self.ring("game_over");
    }
}

/// Discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl AudioSink for Muted {
    fn play_eat(&mut self) {}

    fn play_game_over(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bell_rings_once_per_cue() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Cue::Eat);
        bell.play(Cue::GameOver);
        assert_eq!(bell.out, b"\x07\x07");
    }

    #[test]
    fn test_bell_failure_is_swallowed() {
        let mut bell = TerminalBell::new(BrokenPipe);
        bell.play_eat();
        bell.play_game_over();
    }

    #[test]
    fn test_boxed_sink_dispatches() {
        let mut out = Vec::new();
        {
            let mut sink: Box<dyn AudioSink + '_> = Box::new(TerminalBell::new(&mut out));
            sink.play(Cue::Eat);
            sink.play(Cue::GameOver);
        }
        assert_eq!(out, b"\x07\x07");

        let mut muted: Box<dyn AudioSink> = Box::new(Muted);
        muted.play(Cue::GameOver);
    }
}
