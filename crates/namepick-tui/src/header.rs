//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel: active group and draw progress.
pub fn render_header(frame: &mut Frame, area: Rect, group: &str, remaining: usize, total: usize) {
    let theme = ColorTheme::default();
    let text = vec![Line::from(vec![
        Span::styled("namepick", theme.header_style()),
        Span::raw(format!(" | Group: {group} | {remaining}/{total} left")),
    ])];

    let block = Block::default().borders(Borders::BOTTOM);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
