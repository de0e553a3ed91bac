use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};
use tally_core::{FilterMode, TaskId, TaskListStore, TimeFormat};
use tracing::debug;

use super::constants::UI_MESSAGE_TTL_SECS;
use super::input::InputLine;
use super::visible::VisibleTasks;
use crate::config::KeyBindingsConfig;

/// Which part of the screen receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Browsing the task table.
    TaskList,
    /// Typing a new task.
    Input,
}

pub(super) struct Ui {
    pub(super) store: TaskListStore,
    pub(super) visible: VisibleTasks,
    pub(super) input: InputLine,
    pub(super) focus: Focus,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    pub(super) keybindings: KeyBindingsConfig,
    pub(super) time_format: TimeFormat,
}

impl Ui {
    pub(super) const HEADER_HEIGHT: u16 = 3;
    pub(super) const FILTER_HEIGHT: u16 = 3;
    pub(super) const TABLE_MIN_HEIGHT: u16 = 5;
    pub(super) const INSTRUCTIONS_HEIGHT: u16 = 3;
    pub(super) const STATUS_MESSAGE_MIN_HEIGHT: u16 = 3;
    pub(super) const STATUS_FOOTER_MIN_HEIGHT: u16 =
        Self::INSTRUCTIONS_HEIGHT + Self::STATUS_MESSAGE_MIN_HEIGHT;

    pub(super) fn new(
        store: TaskListStore,
        keybindings: KeyBindingsConfig,
        time_format: TimeFormat,
    ) -> Self {
        let mut ui = Self {
            store,
            visible: VisibleTasks::default(),
            input: InputLine::default(),
            focus: Focus::TaskList,
            message: None,
            should_quit: false,
            keybindings,
            time_format,
        };
        ui.refresh(None);
        ui
    }

    /// Recompute the filtered view after a store operation.
    pub(super) fn refresh(&mut self, preferred: Option<TaskId>) {
        let keep = preferred.or_else(|| self.visible.selected_task_id());
        self.visible.rebuild(self.store.filtered_view(), keep);
    }

    pub(super) fn add_task_from_input(&mut self) {
        let Some(id) = self.store.add_task(self.input.as_str()) else {
            return;
        };
        self.input.clear();
        self.refresh(Some(id));
        if let Some(task) = self.store.get(id) {
            let text = task.text.clone();
            self.info(format!("Added \"{text}\""));
        }
    }

    pub(super) fn toggle_selected(&mut self) {
        let Some(id) = self.visible.selected_task_id() else {
            return;
        };
        if self.store.toggle_completed(id) {
            self.refresh(Some(id));
        }
    }

    pub(super) fn delete_selected(&mut self) {
        let Some(id) = self.visible.selected_task_id() else {
            return;
        };
        let text = self.store.get(id).map(|task| task.text.clone());
        if self.store.delete_task(id) {
            self.refresh(None);
            if let Some(text) = text {
                self.info(format!("Deleted \"{text}\""));
            }
        }
    }

    pub(super) fn select_filter(&mut self, mode: FilterMode) {
        self.store.set_filter(mode);
        self.refresh(None);
    }

    pub(super) fn start_input(&mut self) {
        debug!("input focused");
        self.focus = Focus::Input;
    }

    pub(super) fn cancel_input(&mut self) {
        self.focus = Focus::TaskList;
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(Self::layout_constraints())
            .split(f.area());

        self.draw_input(f, chunks[0]);
        self.draw_filter_bar(f, chunks[1]);
        self.draw_task_table(f, chunks[2]);
        self.draw_status(f, chunks[3]);
    }

    pub(super) const fn layout_constraints() -> [Constraint; 4] {
        [
            Constraint::Length(Self::HEADER_HEIGHT),
            Constraint::Length(Self::FILTER_HEIGHT),
            Constraint::Min(Self::TABLE_MIN_HEIGHT),
            Constraint::Length(Self::STATUS_FOOTER_MIN_HEIGHT),
        ]
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) created_at: Instant,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    pub(super) const fn style() -> Style {
        Style::new().fg(Color::Green)
    }

    pub(super) fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
