use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::view::{Focus, Message, Ui};
use crate::config::ViewType;

impl Ui {
    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(Self::status_layout_constraints())
            .split(area);

        let instructions = Paragraph::new(self.instructions())
            .block(Block::default().title("Keys").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(instructions, rows[0]);

        let message = Paragraph::new(self.status_text())
            .block(Block::default().title("Status").borders(Borders::ALL))
            .style(self.status_style());
        f.render_widget(message, rows[1]);
    }

    pub(in crate::tui) const fn status_layout_constraints() -> [Constraint; 2] {
        [
            Constraint::Length(Self::INSTRUCTIONS_HEIGHT),
            Constraint::Min(Self::STATUS_MESSAGE_MIN_HEIGHT),
        ]
    }

    pub(in crate::tui) fn instructions(&self) -> String {
        let view = match self.focus {
            Focus::TaskList => ViewType::TaskList,
            Focus::Input => ViewType::Input,
        };
        self.keybindings.generate_help_text(view)
    }

    fn status_text(&self) -> &str {
        self.message.as_ref().map_or("", |msg| msg.text.as_str())
    }

    fn status_style(&self) -> Style {
        self.message
            .as_ref()
            .map_or_else(Style::default, |_| Message::style())
    }
}
