//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use namepick_core::{Controller, PickerError, SpinOutcome};

use crate::display::render_display;
use crate::footer::render_footer;
use crate::groups::render_groups;
use crate::header::render_header;
use crate::input::{render_input, InputBuffer};
use crate::keymap::{map_key, InputMode, KeyAction};
use crate::logs::{push_log, render_logs};
use crate::messages::TuiMessage;
use crate::names::render_names;

/// Which list the selection keys move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Names,
    Groups,
}

/// Idle poll interval; spins poll at their own frame deadlines.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether the session ended through Ctrl+C or a signal.
    pub interrupted: bool,
    /// Where keystrokes go.
    pub mode: InputMode,
    /// Which list has focus.
    pub focus: Focus,
    /// Selected row in the name list.
    pub selected_name: usize,
    /// Selected row in the group list.
    pub selected_group: usize,
    /// Text entry buffer.
    pub input: InputBuffer,
    /// Activity log.
    pub logs: Vec<String>,
    controller: Controller,
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create a new TUI app around a controller.
    #[must_use]
    pub fn new(controller: Controller, rx: Receiver<TuiMessage>) -> Self {
        let mut app = Self {
            should_quit: false,
            interrupted: false,
            mode: InputMode::Browse,
            focus: Focus::Names,
            selected_name: 0,
            selected_group: 0,
            input: InputBuffer::new(),
            logs: Vec::new(),
            controller,
            rx,
        };
        app.sync_group_selection();
        app
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Drain pending external messages (Elm Update).
    pub fn update(&mut self, now: Instant) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg, now);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage, now: Instant) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action, now),
            TuiMessage::Tick => self.tick(now),
            TuiMessage::Interrupt => self.interrupt(),
        }
    }

    /// Advance the spin animation.
    pub fn tick(&mut self, now: Instant) {
        if let Some(picked) = self.controller.tick(now) {
            push_log(&mut self.logs, format!("Picked {picked}"));
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction, now: Instant) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Cancel => self.interrupt(),
            KeyAction::Spin => self.spin(now),
            KeyAction::StartAdd => self.enter_mode(InputMode::AddNames),
            KeyAction::NewGroup => self.enter_mode(InputMode::NewGroup),
            KeyAction::RenameGroup => {
                self.enter_mode(InputMode::RenameGroup);
                let current = self.controller.selector().group_name().to_string();
                self.input.set(&current);
            }
            KeyAction::Clear => {
                let result = self.controller.handle_clear();
                self.report(result, "Cleared all names");
                self.selected_name = 0;
            }
            KeyAction::DeleteName => {
                if self.focus == Focus::Names {
                    self.delete_selected_name();
                }
            }
            KeyAction::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Names => Focus::Groups,
                    Focus::Groups => Focus::Names,
                };
            }
            KeyAction::SelectUp => self.move_selection(-1),
            KeyAction::SelectDown => self.move_selection(1),
            KeyAction::Activate => {
                if self.focus == Focus::Groups {
                    self.switch_to_selected_group();
                }
            }
            KeyAction::DeleteGroup => self.delete_selected_group(),
            KeyAction::Insert(c) => self.input.insert(c),
            KeyAction::Backspace => self.input.backspace(),
            KeyAction::Submit => self.submit(),
            KeyAction::Abort => {
                self.input.clear();
                self.mode = InputMode::Browse;
            }
            KeyAction::None => {}
        }
    }

    fn interrupt(&mut self) {
        tracing::debug!("session interrupted");
        self.interrupted = true;
        self.should_quit = true;
    }

    fn enter_mode(&mut self, mode: InputMode) {
        self.input.clear();
        self.mode = mode;
    }

    fn spin(&mut self, now: Instant) {
        match self.controller.handle_spin(now) {
            SpinOutcome::Started => push_log(&mut self.logs, "Spinning...".to_string()),
            SpinOutcome::Reset => push_log(&mut self.logs, "Group reset".to_string()),
            SpinOutcome::Ignored => {}
        }
    }

    fn submit(&mut self) {
        let text = self.input.take();
        let mode = std::mem::replace(&mut self.mode, InputMode::Browse);
        match mode {
            InputMode::Browse => {}
            InputMode::AddNames => match self.controller.handle_add_name(&text) {
                Ok(0) => {}
                Ok(n) => push_log(&mut self.logs, format!("Added {n} name(s)")),
                Err(err) => self.log_error(&err),
            },
            InputMode::NewGroup => {
                let result = self.controller.create_group(&text);
                self.report(result, &format!("Created group {}", text.trim()));
                self.selected_name = 0;
            }
            InputMode::RenameGroup => {
                let result = self.controller.rename_group(&text);
                self.report(result, &format!("Renamed group to {}", text.trim()));
            }
        }
        self.sync_group_selection();
    }

    fn delete_selected_name(&mut self) {
        let view = self.controller.view();
        let Some(entry) = view.names.get(self.selected_name) else {
            return;
        };
        let result = self.controller.remove_name(&entry.name).map(|_| ());
        self.report(result, &format!("Removed {}", entry.name));
        let len = self.controller.selector().original_names().len();
        self.selected_name = self.selected_name.min(len.saturating_sub(1));
    }

    fn switch_to_selected_group(&mut self) {
        let groups = self.controller.selector().list_groups();
        let Some(group) = groups.get(self.selected_group) else {
            return;
        };
        let result = self.controller.switch_group(group);
        self.report(result, &format!("Switched to {group}"));
        self.selected_name = 0;
    }

    fn delete_selected_group(&mut self) {
        let groups = self.controller.selector().list_groups();
        let target = match self.focus {
            Focus::Groups => groups.get(self.selected_group).cloned(),
            Focus::Names => Some(self.controller.selector().group_name().to_string()),
        };
        let Some(group) = target else {
            return;
        };
        let result = self.controller.delete_group(&group);
        self.report(result, &format!("Deleted group {group}"));
        self.selected_name = 0;
        self.sync_group_selection();
    }

    fn move_selection(&mut self, delta: isize) {
        let (index, len) = match self.focus {
            Focus::Names => (
                &mut self.selected_name,
                self.controller.selector().original_names().len(),
            ),
            Focus::Groups => (
                &mut self.selected_group,
                self.controller.selector().list_groups().len(),
            ),
        };
        if len == 0 {
            *index = 0;
            return;
        }
        *index = index.saturating_add_signed(delta).min(len - 1);
    }

    /// Point the group selection at the active group.
    fn sync_group_selection(&mut self) {
        let selector = self.controller.selector();
        let active = selector.group_name();
        self.selected_group = selector
            .list_groups()
            .iter()
            .position(|g| g == active)
            .unwrap_or(0);
    }

    fn report(&mut self, result: Result<(), PickerError>, success: &str) {
        match result {
            Ok(()) => push_log(&mut self.logs, success.to_string()),
            Err(err) => self.log_error(&err),
        }
    }

    fn log_error(&mut self, err: &PickerError) {
        tracing::warn!(%err, "operation failed");
        push_log(&mut self.logs, format!("[ERROR] {err}"));
    }

    /// Compute the layout.
    ///
    /// Returns (header, display, names, side, input, footer) rects, where the
    /// side column holds the group list and the activity log.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(6), // display + button
                Constraint::Min(4),    // lists
                Constraint::Length(3), // input
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer[2]);

        (outer[0], outer[1], main[0], main[1], outer[3], outer[4])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, display_area, names_area, side_area, input_area, footer_area) =
            Self::compute_layout(frame.area());
        let view = self.controller.view();

        render_header(
            frame,
            header_area,
            &view.group,
            view.remaining(),
            view.names.len(),
        );
        render_display(
            frame,
            display_area,
            &view.display,
            view.spinning,
            view.spin_button,
        );
        render_names(
            frame,
            names_area,
            &view.names,
            Some(self.selected_name),
            self.focus == Focus::Names,
        );

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(side_area);
        render_groups(
            frame,
            side[0],
            &view.groups,
            &view.group,
            Some(self.selected_group),
            self.focus == Focus::Groups,
        );
        render_logs(frame, side[1], &self.logs);

        render_input(frame, input_area, self.mode, &self.input);
        render_footer(frame, footer_area, self.mode);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, runs the main loop (render, poll events, tick),
    /// and tears down on exit, including when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            let timeout = self
                .controller
                .next_deadline()
                .map_or(IDLE_POLL, |deadline| {
                    deadline.saturating_duration_since(Instant::now())
                });

            // Resize needs no handling: the next draw picks up the new area.
            if event::poll(timeout)? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Press {
                        let action = map_key(key_event, self.mode);
                        self.handle_message(TuiMessage::KeyPress(action), Instant::now());
                    }
                }
            }

            let now = Instant::now();
            self.handle_message(TuiMessage::Tick, now);
            self.update(now);
        }
    }
}
