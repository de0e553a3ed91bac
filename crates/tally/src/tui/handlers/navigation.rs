use crossterm::event::{KeyEvent, KeyEventKind};
use tally_core::FilterMode;

use super::super::view::{Focus, Ui};
use crate::config::{Action, ViewType};

impl Ui {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.focus {
            Focus::TaskList => self.handle_task_list_key(key),
            Focus::Input => self.handle_input_key(key),
        }
    }

    fn handle_task_list_key(&mut self, key: KeyEvent) {
        let matches = |action| self.keybindings.matches(ViewType::TaskList, action, &key);

        if matches(Action::Quit) {
            self.should_quit = true;
        } else if matches(Action::Down) {
            self.visible.select_next();
        } else if matches(Action::Up) {
            self.visible.select_prev();
        } else if matches(Action::NewTask) {
            self.start_input();
        } else if matches(Action::Toggle) {
            self.toggle_selected();
        } else if matches(Action::Delete) {
            self.delete_selected();
        } else if matches(Action::FilterAll) {
            self.select_filter(FilterMode::All);
        } else if matches(Action::FilterActive) {
            self.select_filter(FilterMode::Active);
        } else if matches(Action::FilterCompleted) {
            self.select_filter(FilterMode::Completed);
        } else if matches(Action::NextFilter) {
            self.select_filter(self.store.filter().next());
        } else if matches(Action::PrevFilter) {
            self.select_filter(self.store.filter().prev());
        }
    }
}
