use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, Write, stderr};

use super::session::Session;
use crate::audio::AudioSink;
use crate::game::GameEngine;
use crate::render::Renderer;

/// Interactive play in the terminal
pub struct HumanMode {
    session: Session<Box<dyn AudioSink>>,
    renderer: Renderer,
}

impl HumanMode {
    pub fn new(engine: GameEngine, audio: Box<dyn AudioSink>) -> Self {
        Self {
            session: Session::new(engine, audio),
            renderer: Renderer::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = match setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                restore_terminal(&mut stderr());
                return Err(err);
            }
        };

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        self.draw(terminal);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) => self.session.handle_key(key),
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.session.request_exit(),
                    }
                }

                // Simulation tick or clock second
                fired = self.session.scheduler_mut().wait() => {
                    self.session.on_timer(fired);
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.session.request_exit();
                }
            }

            if self.session.should_exit() {
                break;
            }

            self.draw(terminal);
        }

        tracing::info!(score = self.session.state().score, "session closed");
        Ok(())
    }

    /// Redraw the current state; a failed frame is skipped, not fatal
    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) {
        let state = self.session.state();
        if let Err(e) = terminal.draw(|frame| self.renderer.render(frame, state)) {
            tracing::warn!(error = %e, "failed to draw frame");
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Undo a partial setup; failures are logged since the setup error wins
fn restore_terminal<W: Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        tracing::error!(?err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, Show) {
        tracing::error!(?err, "failed to leave alternate screen");
    }
}
