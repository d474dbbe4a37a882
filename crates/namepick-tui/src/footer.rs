//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::keymap::InputMode;
use crate::styles::ColorTheme;

fn hints(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Browse => &[
            ("space", "spin"),
            ("a", "add"),
            ("d", "delete name"),
            ("c", "clear"),
            ("tab", "groups"),
            ("n", "new group"),
            ("r", "rename"),
            ("x", "delete group"),
            ("q", "quit"),
        ],
        _ => &[("enter", "confirm"), ("esc", "cancel")],
    }
}

/// Render the footer panel with keyboard shortcuts for the current mode.
pub fn render_footer(frame: &mut Frame, area: Rect, mode: InputMode) {
    let theme = ColorTheme::default();
    let mut spans = Vec::new();
    for (i, (key, label)) in hints(mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(*key, theme.key_style()));
        spans.push(Span::raw(format!(": {label}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
