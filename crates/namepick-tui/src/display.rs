//! Result display and spin button.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use namepick_core::SpinButton;

use crate::styles::ColorTheme;

/// Render the result display with the spin/reset button below it.
pub fn render_display(
    frame: &mut Frame,
    area: Rect,
    display: &str,
    spinning: bool,
    button: SpinButton,
) {
    let theme = ColorTheme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let style = if spinning {
        theme.spinning_style()
    } else {
        theme.result_style()
    };
    let result = Paragraph::new(Line::styled(display.to_string(), style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Pick "));
    frame.render_widget(result, chunks[0]);

    if let Some(label) = button.label() {
        let button = Paragraph::new(Line::styled(format!("[ {label} ]"), theme.key_style()))
            .alignment(Alignment::Center);
        frame.render_widget(button, chunks[1]);
    }
}
