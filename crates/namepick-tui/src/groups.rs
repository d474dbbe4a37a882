//! Group list panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render all groups, marking the active one with `*`.
pub fn render_groups(
    frame: &mut Frame,
    area: Rect,
    groups: &[String],
    active: &str,
    selected: Option<usize>,
    focused: bool,
) {
    let theme = ColorTheme::default();
    let visible = area.height.saturating_sub(2) as usize;
    let skip = selected.map_or(0, |s| (s + 1).saturating_sub(visible));

    let items: Vec<ListItem> = groups
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, group)| {
            let marker = if group == active { "* " } else { "  " };
            let mut style = if group == active {
                theme.header_style()
            } else {
                theme.text_style()
            };
            if focused && selected == Some(i) {
                style = style.patch(theme.selected_style());
            }
            ListItem::new(Line::raw(format!("{marker}{group}"))).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(" Groups ");
    frame.render_widget(List::new(items).block(block), area);
}
