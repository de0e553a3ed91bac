use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::view::Ui;
use crate::config::{Action, ViewType};

impl Ui {
    pub(in crate::tui) fn handle_input_key(&mut self, key: KeyEvent) {
        if self.keybindings.matches(ViewType::Input, Action::Submit, &key) {
            self.add_task_from_input();
            return;
        }

        if self.keybindings.matches(ViewType::Input, Action::Cancel, &key) {
            self.cancel_input();
            return;
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.insert(ch);
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }
}
