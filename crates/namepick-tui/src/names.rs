//! Name list panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use namepick_core::NameEntry;

use crate::styles::ColorTheme;

/// Render the members of the active group; drawn names are struck through.
pub fn render_names(
    frame: &mut Frame,
    area: Rect,
    names: &[NameEntry],
    selected: Option<usize>,
    focused: bool,
) {
    let theme = ColorTheme::default();
    let visible = area.height.saturating_sub(2) as usize;
    let skip = selected.map_or(0, |s| (s + 1).saturating_sub(visible));

    let items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, entry)| {
            let mut style = if entry.chosen {
                theme.chosen_style()
            } else {
                theme.text_style()
            };
            if focused && selected == Some(i) {
                style = style.patch(theme.selected_style());
            }
            ListItem::new(Line::raw(entry.name.as_str())).style(style)
        })
        .collect();

    let title = format!(" Names ({}) ", names.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(title);
    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn entries(n: usize) -> Vec<NameEntry> {
        (0..n)
            .map(|i| NameEntry {
                name: format!("name{i}"),
                chosen: i % 2 == 0,
            })
            .collect()
    }

    #[test]
    fn renders_names() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_names(frame, area, &entries(3), Some(0), true);
            })
            .unwrap();
        let row: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("name0"));
    }

    #[test]
    fn scrolls_to_selection() {
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_names(frame, area, &entries(10), Some(8), true);
            })
            .unwrap();
        // Three visible rows: name6..name8.
        let last: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 3)].symbol().to_string())
            .collect();
        assert!(last.contains("name8"));
    }

    #[test]
    fn empty_list() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_names(frame, area, &[], None, false);
            })
            .unwrap();
    }
}
