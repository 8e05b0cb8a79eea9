//! Main TUI application state and logic

use crate::input::random_array;
use crate::playback::{Player, Tick};
use crate::sorting::{generate_trace_with, Algorithm, SortError, TraceConfig};
use crate::ui::panes::{self, InfoRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Bars,
    Code,
}

impl FocusedPane {
    pub fn toggle(self) -> Self {
        match self {
            FocusedPane::Bars => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::Bars,
        }
    }
}

/// Step count of a previously viewed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub algorithm: Algorithm,
    pub steps: usize,
}

/// The main application state
pub struct App {
    /// Playback state for the current trace
    pub player: Player,

    /// Algorithm the current trace was generated with
    pub algorithm: Algorithm,

    /// The unsorted input the current trace starts from
    pub input: Vec<i32>,

    /// Generator settings
    pub config: TraceConfig,

    /// Source of new arrays on shuffle
    rng: StdRng,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Pseudocode scroll offset
    pub code_scroll: usize,

    /// Algorithm and step count of the previous run
    pub last_run: Option<RunStats>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app, generating the first trace up front
    pub fn new(
        algorithm: Algorithm,
        input: Vec<i32>,
        config: TraceConfig,
        rng: StdRng,
        speed: u16,
    ) -> Result<Self, SortError> {
        let trace = generate_trace_with(algorithm, &input, &config)?;
        Ok(App {
            player: Player::new(trace, speed),
            algorithm,
            input,
            config,
            rng,
            focused_pane: FocusedPane::Bars,
            code_scroll: 0,
            last_run: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.advance_playback(Instant::now());

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(10))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn advance_playback(&mut self, now: Instant) {
        match self.player.tick(now) {
            Tick::Idle => {}
            Tick::Advanced => {
                self.status_message = "Playing...".to_string();
            }
            Tick::Finished => {
                self.last_run = Some(self.current_stats());
                self.status_message = "Sort complete".to_string();
            }
        }
    }

    fn current_stats(&self) -> RunStats {
        RunStats {
            algorithm: self.algorithm,
            steps: self.player.len(),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Left column: Pseudocode (top) | Info (bottom); right: bars
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(main_chunks[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        let info = self.algorithm.info();

        panes::render_code_pane(
            frame,
            left_rows[0],
            info,
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );

        panes::render_info_pane(
            frame,
            left_rows[1],
            &InfoRenderData {
                info,
                step: self.player.current(),
                input_len: self.input.len(),
                speed: self.player.speed(),
                last_run: self.last_run.as_ref(),
            },
        );

        panes::render_bars_pane(
            frame,
            columns[1],
            self.player.current(),
            self.player.is_at_end(),
            self.focused_pane == FocusedPane::Bars,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.player.position(),
            self.player.len(),
            self.player.is_playing(),
        );
    }

    /// Regenerate the trace for `algorithm` over the current input.
    ///
    /// On failure the previous algorithm and trace stay loaded.
    fn select_algorithm(&mut self, algorithm: Algorithm) -> Result<(), SortError> {
        let trace = generate_trace_with(algorithm, &self.input, &self.config).map_err(|e| {
            warn!(algorithm = algorithm.name(), error = %e, "trace generation failed");
            self.player.pause();
            self.status_message = format!("Cannot run {}: {}", algorithm.name(), e);
            e
        })?;

        self.last_run = Some(self.current_stats());
        info!(
            from = self.algorithm.name(),
            to = algorithm.name(),
            steps = trace.len(),
            "switched algorithm"
        );
        self.player.load(trace);
        self.algorithm = algorithm;
        self.code_scroll = 0;
        self.status_message = format!("Selected {}", algorithm.name());
        Ok(())
    }

    /// Move to the next (or previous) algorithm that accepts the current input
    fn cycle_algorithm(&mut self, forward: bool) {
        let mut candidate = self.algorithm;
        let mut skipped = Vec::new();
        for _ in 1..Algorithm::ALL.len() {
            candidate = if forward {
                candidate.next()
            } else {
                candidate.prev()
            };
            if self.select_algorithm(candidate).is_ok() {
                if !skipped.is_empty() {
                    self.status_message = format!(
                        "Selected {} (skipped {}: unsupported input)",
                        candidate.name(),
                        skipped.join(", ")
                    );
                }
                return;
            }
            skipped.push(candidate.name());
        }
    }

    /// Replace the input with a fresh random array of the same length
    fn shuffle(&mut self) {
        let len = self.input.len();
        self.input = random_array(&mut self.rng, len);
        info!(len, "generated new input");
        if self.select_algorithm(self.algorithm).is_ok() {
            self.status_message = "New random array".to_string();
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.player.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.player.step_forward().is_err() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.player.pause();
                self.cycle_algorithm(true);
            }
            KeyCode::BackTab => {
                self.player.pause();
                self.cycle_algorithm(false);
            }
            KeyCode::Char('f') => {
                self.focused_pane = self.focused_pane.toggle();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.player.pause();
                self.shuffle();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.player.faster();
                self.status_message = format!("Speed {}", self.player.speed());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.player.slower();
                self.status_message = format!("Speed {}", self.player.speed());
            }
            KeyCode::Left => {
                self.player.pause();
                self.status_message = match self.player.step_backward() {
                    Ok(()) => "Stepped backward".to_string(),
                    Err(e) => format!("Cannot step backward: {}", e),
                };
            }
            KeyCode::Right => {
                self.player.pause();
                self.status_message = match self.player.step_forward() {
                    Ok(()) => "Stepped forward".to_string(),
                    Err(e) => format!("Cannot step forward: {}", e),
                };
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Code {
                    self.code_scroll = self.code_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Code {
                    self.code_scroll = self.code_scroll.saturating_add(1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.player.toggle_play();
                    self.status_message = if self.player.is_playing() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter => {
                self.player.pause();
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.player.pause();
                self.player.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }
}
