pub mod cues;

pub use cues::{AudioSink, Muted, TerminalBell};
