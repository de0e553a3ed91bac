use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};
use tally_core::FilterMode;

use super::super::view::Ui;

impl Ui {
    pub(in crate::tui) fn draw_filter_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let selected = self.store.filter();
        let selected_index = FilterMode::ALL
            .iter()
            .position(|mode| *mode == selected)
            .unwrap_or_default();

        let tabs = Tabs::new(self.filter_titles())
            .block(Block::default().title("Filter").borders(Borders::ALL))
            .select(selected_index)
            .style(Style::default().add_modifier(Modifier::DIM))
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .remove_modifier(Modifier::DIM),
            );
        f.render_widget(tabs, area);
    }

    pub(in crate::tui) fn filter_titles(&self) -> Vec<Line<'static>> {
        let counts = self.store.counts();
        FilterMode::ALL
            .iter()
            .map(|mode| Line::from(format!("{} ({})", mode.label(), counts.for_mode(*mode))))
            .collect()
    }
}
