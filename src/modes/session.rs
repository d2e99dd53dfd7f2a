use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::audio::AudioSink;
use crate::game::{Event, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::scheduler::{Scheduler, TimerId};

const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// One interactive game session.
///
/// Owns the single mutable copy of the game state and applies every input
/// and timer event to it in order. The simulation timer and the one-second
/// clock run for the whole session; outside the running phase their events
/// are no-ops.
pub struct Session<A: AudioSink> {
    engine: GameEngine,
    state: GameState,
    audio: A,
    input_handler: InputHandler,
    scheduler: Scheduler,
    sim_timer: TimerId,
    clock_timer: TimerId,
    should_exit: bool,
}

impl<A: AudioSink> Session<A> {
    pub fn new(engine: GameEngine, audio: A) -> Self {
        let state = engine.initial_state();
        let mut scheduler = Scheduler::new();
        let sim_timer = scheduler.register(engine.config().tick_interval(state.difficulty));
        let clock_timer = scheduler.register(CLOCK_PERIOD);

        tracing::info!(config = ?engine.config(), "session opened");

        Self {
            engine,
            state,
            audio,
            input_handler: InputHandler::new(),
            scheduler,
            sim_timer,
            clock_timer,
            should_exit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn sim_timer(&self) -> TimerId {
        self.sim_timer
    }

    pub fn clock_timer(&self) -> TimerId {
        self.clock_timer
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_handler.handle_key_event(key, self.state.phase) {
            KeyAction::Game(event) => self.dispatch(event),
            KeyAction::Exit => self.request_exit(),
            KeyAction::None => {}
        }
    }

    pub fn on_timer(&mut self, id: TimerId) {
        if id == self.sim_timer {
            self.dispatch(Event::Tick);
        } else if id == self.clock_timer {
            self.dispatch(Event::ClockTick);
        }
    }

    /// Apply one event, play its cues and retune the simulation timer
    pub fn dispatch(&mut self, event: Event) {
        let result = self.engine.apply(&self.state, event);

        if result.state.difficulty != self.state.difficulty {
            let period = self.engine.config().tick_interval(result.state.difficulty);
            self.scheduler.set_period(self.sim_timer, period);
        }

        self.state = result.state;
        for cue in result.cues {
            self.audio.play(cue);
        }
    }
}
