use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Command, GameConfig, GameMode, GameSession, NoFreeCell};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Owns the session and drives it from a single select loop: one simulation
/// step per tick-timer fire, renders on its own timer, input in between.
pub struct ArcadeMode {
    session: GameSession,
    tick_period: Duration,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl ArcadeMode {
    pub fn new(config: GameConfig) -> Result<Self, NoFreeCell> {
        let tick_period = Duration::from_millis(1000 / u64::from(config.tick_rate));
        let session = GameSession::new(config)?;

        Ok(Self {
            session,
            tick_period,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_period);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    self.update_game()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.session.mode() == GameMode::Playing {
                        self.metrics.update();
                    }
                    terminal.draw(|frame| {
                        let snapshot = self.session.snapshot();
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            let Some(command) = self.input_handler.handle_key_event(key) else {
                return Ok(());
            };

            if command == Command::Quit {
                self.should_quit = true;
                return Ok(());
            }

            let was_playing = self.session.mode() == GameMode::Playing;
            self.session
                .apply_command(command)
                .context("Grid has no free cell left")?;
            if !was_playing && self.session.mode() == GameMode::Playing {
                self.metrics.on_round_start();
            }
        }

        Ok(())
    }

    fn update_game(&mut self) -> Result<()> {
        let was_playing = self.session.mode() == GameMode::Playing;

        self.session
            .tick()
            .context("Grid has no free cell left")?;

        if was_playing {
            match self.session.mode() {
                GameMode::GameOver => self.metrics.on_round_over(self.session.score(), false),
                GameMode::Victory => self.metrics.on_round_over(self.session.score(), true),
                _ => {}
            }
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
