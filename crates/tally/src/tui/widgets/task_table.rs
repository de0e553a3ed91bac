use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};
use tally_core::{FilterMode, Task};

use super::super::constants::{
    ACTIONS_COLUMN_WIDTH, STATUS_COLUMN_WIDTH, TASK_COLUMN_MIN_WIDTH, TASK_TABLE_HIGHLIGHT_SYMBOL,
    TIME_COLUMN_WIDTH,
};
use super::super::view::Ui;
use super::util::truncate_with_ellipsis;

const HEADERS: [&str; 4] = ["Task", "Time", "Status", "Actions"];
const COLUMN_SPACING: u16 = 1;

impl Ui {
    pub(in crate::tui) fn draw_task_table(&self, f: &mut Frame<'_>, area: Rect) {
        let header = Row::new(
            HEADERS
                .iter()
                .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))),
        );

        let text_width = Self::task_column_width(area);
        let rows: Vec<Row<'_>> = if self.visible.is_empty() {
            vec![Row::new([Cell::from(self.empty_message())])]
        } else {
            self.visible
                .tasks()
                .iter()
                .map(|task| self.task_row(task, text_width))
                .collect()
        };

        let widths = [
            Constraint::Min(TASK_COLUMN_MIN_WIDTH),
            Constraint::Length(TIME_COLUMN_WIDTH),
            Constraint::Length(STATUS_COLUMN_WIDTH),
            Constraint::Length(ACTIONS_COLUMN_WIDTH),
        ];

        let title = format!(
            "Tasks ({}/{})",
            self.visible.tasks().len(),
            self.store.len()
        );
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(Block::default().title(title).borders(Borders::ALL))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_TABLE_HIGHLIGHT_SYMBOL);

        let mut state = TableState::default();
        if !self.visible.is_empty() {
            state.select(Some(self.visible.selected_index()));
        }
        f.render_stateful_widget(table, area, &mut state);
    }

    fn task_row(&self, task: &Task, text_width: usize) -> Row<'static> {
        let text_style = if task.completed {
            Style::default().add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        let status_style = if task.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        let text = truncate_with_ellipsis(&task.text, text_width).into_owned();
        let actions = Line::from(vec![
            Span::styled(
                format!("[{}]", task.toggle_label()),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" "),
            Span::styled("[Delete]", Style::default().fg(Color::Red)),
        ]);

        Row::new(vec![
            Cell::from(text).style(text_style),
            Cell::from(task.time_label(&self.time_format)),
            Cell::from(task.status_label()).style(status_style),
            Cell::from(actions),
        ])
    }

    pub(in crate::tui) fn empty_message(&self) -> &'static str {
        if self.store.is_empty() || self.store.filter() == FilterMode::All {
            "No tasks"
        } else {
            "No tasks match the filter"
        }
    }

    /// Columns available to the text column once borders, the highlight
    /// symbol and the fixed-width columns are accounted for.
    pub(in crate::tui) fn task_column_width(area: Rect) -> usize {
        let highlight = u16::try_from(TASK_TABLE_HIGHLIGHT_SYMBOL.chars().count()).unwrap_or(0);
        let fixed = 2
            + highlight
            + TIME_COLUMN_WIDTH
            + STATUS_COLUMN_WIDTH
            + ACTIONS_COLUMN_WIDTH
            + COLUMN_SPACING * 3;
        usize::from(area.width.saturating_sub(fixed).max(TASK_COLUMN_MIN_WIDTH))
    }
}
