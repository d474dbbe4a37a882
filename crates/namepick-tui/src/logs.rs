//! Activity log panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Maximum number of retained log lines.
pub const MAX_LOG_LINES: usize = 200;

/// Append a line, dropping the oldest once the cap is reached.
pub fn push_log(logs: &mut Vec<String>, line: String) {
    logs.push(line);
    if logs.len() > MAX_LOG_LINES {
        let excess = logs.len() - MAX_LOG_LINES;
        logs.drain(..excess);
    }
}

/// Render the most recent log lines that fit in `area`.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String]) {
    let theme = ColorTheme::default();
    let visible_height = area.height.saturating_sub(2) as usize; // account for borders
    let skip = logs.len().saturating_sub(visible_height);

    let items: Vec<ListItem> = logs
        .iter()
        .skip(skip)
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                theme.error_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Activity ");
    frame.render_widget(List::new(items).block(block), area);
}
