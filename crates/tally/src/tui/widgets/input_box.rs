use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use unicode_width::UnicodeWidthStr;

use super::super::constants::{APP_TITLE, INPUT_PLACEHOLDER};
use super::super::view::{Focus, Ui};

impl Ui {
    pub(in crate::tui) fn draw_input(&self, f: &mut Frame<'_>, area: Rect) {
        let editing = self.focus == Focus::Input;
        let line = if self.input.is_empty() {
            Line::from(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.input.as_str())
        };

        let border_style = if editing {
            Style::default().fg(Color::Blue)
        } else {
            Style::default()
        };
        let input = Paragraph::new(line).block(
            Block::default()
                .title(APP_TITLE)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(input, area);

        if editing {
            let inner_width = area.width.saturating_sub(2);
            let offset = u16::try_from(self.input.before_cursor().width()).unwrap_or(u16::MAX);
            f.set_cursor_position(Position::new(
                area.x + 1 + offset.min(inner_width.saturating_sub(1)),
                area.y + 1,
            ));
        }
    }
}
