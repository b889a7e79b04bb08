//! Replay viewer state and event loop

use crate::subject::graph::Graph;
use crate::trace::replay::Replay;
use crate::trace::Snapshot;
use crate::ui::panes::{
    render_bars_pane, render_graph_pane, render_status_bar, render_steps_pane, BarsRenderData,
    GraphRenderData, StatusRenderData, StepsScrollState,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Subject,
    Steps,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Subject => FocusedPane::Steps,
            FocusedPane::Steps => FocusedPane::Subject,
        }
    }
}

/// The viewer state
pub struct App {
    /// The trace being replayed
    pub replay: Replay,

    /// Graph the search ran on, used to list edges
    pub graph: Option<Graph>,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub subject_scroll: usize,
    pub steps_scroll: StepsScrollState,

    pub should_quit: bool,

    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between steps in play mode
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(replay: Replay, graph: Option<Graph>, play_interval: Duration) -> Self {
        let now = Instant::now();
        App {
            replay,
            graph,
            focused_pane: FocusedPane::Subject,
            subject_scroll: 0,
            steps_scroll: StepsScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            play_interval,
            last_play_time: now,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Run the viewer until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                self.tick();
            }

            // Poll with a timeout so auto-play keeps running without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance one step in play mode, stopping at the end
    fn tick(&mut self) {
        if self.replay.step_forward().is_ok() {
            self.status_message = "Playing...".to_string();
        } else {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
        self.last_play_time = Instant::now();
    }

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let subject_focused = self.focused_pane == FocusedPane::Subject;
        match self.replay.current().map(|step| &step.snapshot) {
            Some(Snapshot::Visited(visited)) => render_graph_pane(
                frame,
                columns[0],
                GraphRenderData {
                    graph: self.graph.as_ref(),
                    visited,
                },
                subject_focused,
                &mut self.subject_scroll,
            ),
            Some(Snapshot::Values(values)) => {
                let step = self.replay.current();
                render_bars_pane(
                    frame,
                    columns[0],
                    BarsRenderData {
                        values,
                        comparing: step.map(|s| s.comparing()).unwrap_or(&[]),
                        swapped: step.map(|s| s.swapped()).unwrap_or(&[]),
                    },
                    subject_focused,
                    &mut self.subject_scroll,
                )
            }
            None => render_bars_pane(
                frame,
                columns[0],
                BarsRenderData {
                    values: &[],
                    comparing: &[],
                    swapped: &[],
                },
                subject_focused,
                &mut self.subject_scroll,
            ),
        }

        render_steps_pane(
            frame,
            columns[1],
            self.replay.trace(),
            self.replay.position(),
            self.focused_pane == FocusedPane::Steps,
            &mut self.steps_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                algorithm: self.replay.trace().algorithm(),
                position: self.replay.position(),
                total_steps: self.replay.len(),
                is_playing: self.is_playing,
            },
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.replay.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = match self.replay.step_backward() {
                    Ok(()) => "Stepped backward".to_string(),
                    Err(e) => format!("Cannot step backward: {}", e),
                };
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.status_message = match self.replay.step_forward() {
                    Ok(()) => "Stepped forward".to_string(),
                    Err(e) => format!("Cannot step forward: {}", e),
                };
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Subject => {
                    self.subject_scroll = self.subject_scroll.saturating_sub(1);
                }
                FocusedPane::Steps => {
                    // Scrolling up makes the current step move down visually
                    if let Some(row) = self.steps_scroll.target_row {
                        self.steps_scroll.target_row = Some(row.saturating_add(1));
                    }
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Subject => {
                    self.subject_scroll = self.subject_scroll.saturating_add(1);
                }
                FocusedPane::Steps => {
                    if let Some(row) = self.steps_scroll.target_row {
                        self.steps_scroll.target_row = Some(row.saturating_sub(1));
                    }
                }
            },
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        let now = Instant::now();
                        self.last_play_time = now.checked_sub(self.play_interval).unwrap_or(now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.replay.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.replay.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }
}
