//! Single-line text entry.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::keymap::InputMode;
use crate::styles::ColorTheme;

/// Text typed in one of the entry modes.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn insert(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Take the text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

fn prompt(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Browse => "",
        InputMode::AddNames => "Add names (comma separated): ",
        InputMode::NewGroup => "New group: ",
        InputMode::RenameGroup => "Rename group: ",
    }
}

/// Render the entry line; idle text when browsing.
pub fn render_input(frame: &mut Frame, area: Rect, mode: InputMode, buffer: &InputBuffer) {
    let theme = ColorTheme::default();
    let line = if mode == InputMode::Browse {
        Line::styled("press a to add names", theme.chosen_style())
    } else {
        Line::from(vec![
            Span::styled(prompt(mode), theme.key_style()),
            Span::raw(buffer.as_str().to_string()),
            Span::styled("_", theme.header_style()),
        ])
    };
    let block = Block::default().borders(Borders::ALL).title(" Input ");
    frame.render_widget(Paragraph::new(line).block(block), area);
}
