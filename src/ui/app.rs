//! Main TUI application state and logic

use super::panes::{
    render_narration_pane, render_source_pane, render_status_bar, render_tree_pane,
    render_variables_pane, SourceScrollState, StatusRenderData, TreeRenderData, TreeScrollState,
};
use crate::layout::{layout, LayoutOptions, TreeLayout};
use crate::playback::{Playback, PlaybackError};
use crate::trace::analysis::{longest_path, longest_path_through};
use crate::trace::listing::REFERENCE_SOURCE;
use crate::trace::{generate_steps, AlgorithmStep};
use crate::tree::errors::TreeInputError;
use crate::tree::input::{format_level_order, parse_and_validate};
use crate::tree::presets::presets;
use crate::tree::random::{random_level_order, RandomTreeOptions};
use crate::tree::{build_decorated, DecoratedTree, NodeHandle};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
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
    Tree,
    Source,
    Variables,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: tree -> source -> variables)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tree => FocusedPane::Source,
            FocusedPane::Source => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Tree,
        }
    }
}

/// Keyboard mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a level-order array; `error` holds the last rejection
    EditTree {
        buffer: String,
        error: Option<String>,
    },
}

/// One tree together with everything derived from it
#[derive(Debug, Clone)]
pub struct Scene {
    pub values: Vec<Option<i32>>,
    pub tree: DecoratedTree,
    pub layout: TreeLayout,
    /// Settled longest path, drawn on the final step
    pub final_path: Vec<NodeHandle>,
}

impl Scene {
    /// Validate, decorate, lay out and trace a level-order array
    pub fn build(values: Vec<Option<i32>>) -> Result<(Scene, Vec<AlgorithmStep>), TreeInputError> {
        let tree = build_decorated(&values)?;
        let steps = generate_steps(&tree);
        let layout = layout(&tree, LayoutOptions::default());

        let apex = steps
            .last()
            .and_then(|s| s.diameter_path_so_far.first())
            .and_then(|id| tree.find(id));
        let final_path = match apex {
            Some(apex) => longest_path_through(&tree, apex),
            None => longest_path(&tree),
        };

        Ok((
            Scene {
                values,
                tree,
                layout,
                final_path,
            },
            steps,
        ))
    }
}

/// The main application state
pub struct App {
    pub scene: Scene,
    pub playback: Playback,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub tree_scroll: TreeScrollState,
    pub source_scroll: SourceScrollState,
    pub variables_scroll: usize,

    pub input_mode: InputMode,

    /// Index of the preset `p` loads next
    pub next_preset: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    rng: StdRng,
    random_options: RandomTreeOptions,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app over an already validated level-order array
    pub fn new(
        values: Vec<Option<i32>>,
        interval: Duration,
        rng: StdRng,
    ) -> Result<Self, TreeInputError> {
        let (scene, steps) = Scene::build(values)?;
        Ok(App {
            scene,
            playback: Playback::with_interval(steps, interval),
            focused_pane: FocusedPane::Tree,
            tree_scroll: TreeScrollState::default(),
            source_scroll: SourceScrollState::default(),
            variables_scroll: 0,
            input_mode: InputMode::Normal,
            next_preset: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            rng,
            random_options: RandomTreeOptions::default(),
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

            if self.playback.tick(Instant::now()) {
                self.status_message = "Playing...".to_string();
            } else if !self.playback.is_playing() && self.status_message == "Playing..." {
                self.status_message = "Playback complete".to_string();
            }

            // Use poll with timeout to allow auto-play to work
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

    /// Replace the tree. On invalid input the current tree is kept.
    pub fn load(&mut self, values: Vec<Option<i32>>, label: &str) -> Result<(), TreeInputError> {
        let (scene, steps) = Scene::build(values)?;
        tracing::info!(
            source = label,
            nodes = scene.tree.len(),
            steps = steps.len(),
            "loaded tree"
        );
        self.scene = scene;
        self.playback.replace(steps);
        self.tree_scroll = TreeScrollState::default();
        self.source_scroll = SourceScrollState::default();
        self.variables_scroll = 0;
        self.status_message = format!("Loaded {}", label);
        Ok(())
    }

    fn current_step(&self) -> Option<&AlgorithmStep> {
        self.playback.current()
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Tree (top) | Narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Source (top) | Variables (bottom)
        let source_height = REFERENCE_SOURCE.lines().count() as u16 + 2;
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(source_height), Constraint::Min(0)])
            .split(columns[1]);

        let step = self.playback.current();
        let on_final_step = self.playback.is_at_end() && !self.playback.is_empty();
        let final_path: &[NodeHandle] = if on_final_step {
            &self.scene.final_path
        } else {
            &[]
        };

        render_tree_pane(
            frame,
            left_rows[0],
            &TreeRenderData {
                tree: &self.scene.tree,
                layout: &self.scene.layout,
                step,
                final_path,
            },
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        render_narration_pane(frame, left_rows[1], step, &self.scene.tree);

        render_source_pane(
            frame,
            right_rows[0],
            REFERENCE_SOURCE,
            step,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        render_variables_pane(
            frame,
            right_rows[1],
            step,
            self.focused_pane == FocusedPane::Variables,
            &mut self.variables_scroll,
        );

        let edit = match &self.input_mode {
            InputMode::EditTree { buffer, error } => Some((buffer.as_str(), error.as_deref())),
            InputMode::Normal => None,
        };
        render_status_bar(
            frame,
            status_area,
            &StatusRenderData {
                message: &self.status_message,
                current_step: self.playback.position(),
                total_steps: self.playback.len(),
                is_playing: self.playback.is_playing(),
                interval: self.playback.interval(),
                edit,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if matches!(self.input_mode, InputMode::EditTree { .. }) {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.playback.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.playback.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.playback.pause();
                let result = self.playback.step_backward();
                self.report_step(result, "Stepped backward");
            }
            KeyCode::Right => {
                self.playback.pause();
                let result = self.playback.step_forward();
                self.report_step(result, "Stepped forward");
            }
            KeyCode::Up => self.scroll(-1),
            KeyCode::Down => self.scroll(1),
            KeyCode::Char('h') if self.focused_pane == FocusedPane::Tree => {
                self.tree_scroll.follow = false;
                self.tree_scroll.offset_x = self.tree_scroll.offset_x.saturating_sub(4);
            }
            KeyCode::Char('l') if self.focused_pane == FocusedPane::Tree => {
                self.tree_scroll.follow = false;
                self.tree_scroll.offset_x = self.tree_scroll.offset_x.saturating_add(4);
            }
            KeyCode::Char('f') => {
                self.tree_scroll.follow = true;
                self.status_message = "Following current node".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.playback.toggle_play(Instant::now()) {
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.playback.faster();
                self.status_message =
                    format!("Interval {}ms", self.playback.interval().as_millis());
            }
            KeyCode::Char('-') => {
                self.playback.slower();
                self.status_message =
                    format!("Interval {}ms", self.playback.interval().as_millis());
            }
            KeyCode::Enter => {
                self.playback.pause();
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.playback.pause();
                self.playback.rewind();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('p') => self.load_next_preset(),
            KeyCode::Char('r') => self.load_random(),
            KeyCode::Char('e') => {
                self.playback.pause();
                self.input_mode = InputMode::EditTree {
                    buffer: format_level_order(&self.scene.values),
                    error: None,
                };
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let InputMode::EditTree { buffer, error } = &mut self.input_mode else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Enter => {
                let text = buffer.clone();
                match parse_and_validate(&text) {
                    Ok(values) => match self.load(values, "custom tree") {
                        Ok(()) => self.input_mode = InputMode::Normal,
                        Err(e) => self.set_edit_error(e),
                    },
                    Err(e) => self.set_edit_error(e),
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
                *error = None;
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                *error = None;
            }
            _ => {}
        }
    }

    fn set_edit_error(&mut self, e: TreeInputError) {
        tracing::debug!(error = %e, "rejected tree input");
        if let InputMode::EditTree { error, .. } = &mut self.input_mode {
            *error = Some(e.to_string());
        }
    }

    fn load_next_preset(&mut self) {
        let all = presets();
        if all.is_empty() {
            return;
        }
        let preset = all[self.next_preset % all.len()];
        self.next_preset = (self.next_preset + 1) % all.len();
        let label = format!("preset '{}': {}", preset.name, preset.summary);
        if let Err(e) = self.load(preset.values.to_vec(), &label) {
            self.status_message = format!("Error: {}", e);
        }
    }

    fn load_random(&mut self) {
        let values = random_level_order(&mut self.rng, self.random_options);
        let label = format!("random tree {}", format_level_order(&values));
        if let Err(e) = self.load(values, &label) {
            self.status_message = format!("Error: {}", e);
        }
    }

    fn scroll(&mut self, delta: isize) {
        match self.focused_pane {
            FocusedPane::Tree => {
                self.tree_scroll.follow = false;
                self.tree_scroll.offset_y = self.tree_scroll.offset_y.saturating_add_signed(delta);
            }
            FocusedPane::Source => {
                // Scrolling up makes the current line move down visually
                if let Some(row) = self.source_scroll.target_line_row {
                    self.source_scroll.target_line_row = Some(row.saturating_add_signed(-delta));
                }
            }
            FocusedPane::Variables => {
                self.variables_scroll = self.variables_scroll.saturating_add_signed(delta);
            }
        }
    }

    fn report_step(&mut self, result: Result<(), PlaybackError>, done: &str) {
        self.status_message = match result {
            Ok(()) => match self.current_step() {
                Some(step) => format!("{}: {}", done, step.description),
                None => done.to_string(),
            },
            Err(e) => format!("Cannot step: {}", e),
        };
    }
}
