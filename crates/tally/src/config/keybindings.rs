//! Keybindings configuration for the TUI.

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Keybindings configuration for all TUI views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindingsConfig {
    /// Keybindings for the task table.
    pub task_list: TaskListKeyBindings,
    /// Keybindings while typing a new task.
    pub input: InputKeyBindings,
}

/// Keybindings for the task table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskListKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Move down in the table.
    pub down: Vec<String>,
    /// Move up in the table.
    pub up: Vec<String>,
    /// Start typing a new task.
    pub new_task: Vec<String>,
    /// Toggle the selected task between done and not done.
    pub toggle: Vec<String>,
    /// Delete the selected task.
    pub delete: Vec<String>,
    /// Show every task.
    pub filter_all: Vec<String>,
    /// Show tasks that are not completed.
    pub filter_active: Vec<String>,
    /// Show completed tasks.
    pub filter_completed: Vec<String>,
    /// Select the next filter.
    pub next_filter: Vec<String>,
    /// Select the previous filter.
    pub prev_filter: Vec<String>,
}

/// Keybindings for the new-task input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputKeyBindings {
    /// Add the typed task.
    pub submit: Vec<String>,
    /// Leave the input line without adding.
    pub cancel: Vec<String>,
}

impl Default for TaskListKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Esc"],
            down: vec_of_strings!["j", "Down"],
            up: vec_of_strings!["k", "Up"],
            new_task: vec_of_strings!["a", "n"],
            toggle: vec_of_strings!["Space", "Enter"],
            delete: vec_of_strings!["d", "Delete"],
            filter_all: vec_of_strings!["1"],
            filter_active: vec_of_strings!["2"],
            filter_completed: vec_of_strings!["3"],
            next_filter: vec_of_strings!["Tab", "f"],
            prev_filter: vec_of_strings!["BackTab", "F"],
        }
    }
}

impl Default for InputKeyBindings {
    fn default() -> Self {
        Self {
            submit: vec_of_strings!["Enter"],
            cancel: vec_of_strings!["Esc"],
        }
    }
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "Enter" -> `KeyCode::Enter`
/// - "Ctrl+d" -> `KeyCode::Char('d')` with CONTROL modifier
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    if s.is_empty() {
        bail!("Empty key string");
    }

    // "+" alone is a literal key, not a separator.
    let parts: Vec<&str> = if s == "+" { vec![s] } else { s.split('+').collect() };

    let mut modifiers = KeyModifiers::NONE;
    let (key_part, modifier_parts) = parts
        .split_last()
        .ok_or_else(|| anyhow!("Empty key string"))?;
    for &modifier in modifier_parts {
        match modifier {
            "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
            "Alt" => modifiers |= KeyModifiers::ALT,
            "Shift" => modifiers |= KeyModifiers::SHIFT,
            other => bail!("Unknown modifier: {other}"),
        }
    }

    let code = parse_key_code(key_part)?;

    Ok(KeyEvent::new(code, modifiers))
}

/// Named keys: config spelling, key code, help label.
const NAMED_KEYS: &[(&str, KeyCode, &str)] = &[
    ("Enter", KeyCode::Enter, "↵"),
    ("Esc", KeyCode::Esc, "Esc"),
    ("Backspace", KeyCode::Backspace, "BS"),
    ("Delete", KeyCode::Delete, "Del"),
    ("Insert", KeyCode::Insert, "Ins"),
    ("Left", KeyCode::Left, "←"),
    ("Right", KeyCode::Right, "→"),
    ("Up", KeyCode::Up, "↑"),
    ("Down", KeyCode::Down, "↓"),
    ("Home", KeyCode::Home, "Home"),
    ("End", KeyCode::End, "End"),
    ("PageUp", KeyCode::PageUp, "PgUp"),
    ("PageDown", KeyCode::PageDown, "PgDn"),
    ("Tab", KeyCode::Tab, "Tab"),
    ("BackTab", KeyCode::BackTab, "S-Tab"),
    ("Space", KeyCode::Char(' '), "Space"),
];

fn parse_key_code(s: &str) -> Result<KeyCode> {
    if let Some((_, code, _)) = NAMED_KEYS.iter().find(|(name, _, _)| *name == s) {
        return Ok(*code);
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(KeyCode::Char(ch)),
        _ => bail!("Unknown key: {s}"),
    }
}

/// Validate the keybindings configuration.
///
/// Checks for:
/// - Empty key bindings
/// - Invalid key expressions
/// - Key conflicts within each view
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    for (view, bindings) in [
        ("task_list", collect_task_list_bindings(config)),
        ("input", collect_input_bindings(config)),
    ] {
        validate_view_keybindings(view, &bindings)?;
    }
    Ok(())
}

fn validate_view_keybindings(view_name: &str, bindings: &[(&str, &[String])]) -> Result<()> {
    let mut key_to_actions: HashMap<(KeyCode, KeyModifiers), Vec<&str>> = HashMap::new();

    for &(action, keys) in bindings {
        if keys.is_empty() {
            bail!("{view_name}.{action} must have at least one key binding");
        }
        for key in keys {
            let event = parse_key(key)
                .with_context(|| format!("Invalid key '{key}' in {view_name}.{action}"))?;
            key_to_actions
                .entry(normalize(&event))
                .or_default()
                .push(action);
        }
    }

    let mut conflicts: Vec<_> = key_to_actions
        .into_iter()
        .filter(|(_, actions)| actions.len() > 1)
        .collect();
    conflicts.sort_by(|left, right| left.1.cmp(&right.1));
    if let Some((_, actions)) = conflicts.first() {
        bail!("A key is bound to multiple actions in {view_name}: {actions:?}");
    }

    Ok(())
}

fn collect_task_list_bindings(config: &KeyBindingsConfig) -> Vec<(&'static str, &[String])> {
    let keys = &config.task_list;
    vec![
        ("quit", keys.quit.as_slice()),
        ("down", keys.down.as_slice()),
        ("up", keys.up.as_slice()),
        ("new_task", keys.new_task.as_slice()),
        ("toggle", keys.toggle.as_slice()),
        ("delete", keys.delete.as_slice()),
        ("filter_all", keys.filter_all.as_slice()),
        ("filter_active", keys.filter_active.as_slice()),
        ("filter_completed", keys.filter_completed.as_slice()),
        ("next_filter", keys.next_filter.as_slice()),
        ("prev_filter", keys.prev_filter.as_slice()),
    ]
}

fn collect_input_bindings(config: &KeyBindingsConfig) -> Vec<(&'static str, &[String])> {
    vec![
        ("submit", config.input.submit.as_slice()),
        ("cancel", config.input.cancel.as_slice()),
    ]
}

/// Terminals report shifted characters and `BackTab` with SHIFT set; the
/// character itself already carries that information.
fn normalize(event: &KeyEvent) -> (KeyCode, KeyModifiers) {
    match event.code {
        KeyCode::Char(_) | KeyCode::BackTab => (event.code, event.modifiers.difference(KeyModifiers::SHIFT)),
        code => (code, event.modifiers),
    }
}

/// View type for keybinding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    /// Task table.
    TaskList,
    /// New-task input line.
    Input,
}

/// Action that can be performed in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Move down.
    Down,
    /// Move up.
    Up,
    /// Start typing a new task.
    NewTask,
    /// Toggle completion of the selected task.
    Toggle,
    /// Delete the selected task.
    Delete,
    /// Select the "all" filter.
    FilterAll,
    /// Select the "active" filter.
    FilterActive,
    /// Select the "completed" filter.
    FilterCompleted,
    /// Cycle to the next filter.
    NextFilter,
    /// Cycle to the previous filter.
    PrevFilter,
    /// Submit the input line.
    Submit,
    /// Cancel the input line.
    Cancel,
}

impl KeyBindingsConfig {
    /// Generate help text for a specific view.
    pub fn generate_help_text(&self, view: ViewType) -> String {
        match view {
            ViewType::TaskList => {
                let keys = &self.task_list;
                format!(
                    "{}/{}:move {}:new {}:done/undo {}:delete {}/{}/{}:all/active/completed {}:next filter {}:quit",
                    first_key_label(&keys.down),
                    first_key_label(&keys.up),
                    first_key_label(&keys.new_task),
                    first_key_label(&keys.toggle),
                    first_key_label(&keys.delete),
                    first_key_label(&keys.filter_all),
                    first_key_label(&keys.filter_active),
                    first_key_label(&keys.filter_completed),
                    first_key_label(&keys.next_filter),
                    first_key_label(&keys.quit),
                )
            }
            ViewType::Input => format!(
                "{}:add {}:cancel",
                first_key_label(&self.input.submit),
                first_key_label(&self.input.cancel),
            ),
        }
    }

    /// Check if a key event matches a configured action in a view.
    pub fn matches(&self, view: ViewType, action: Action, key: &KeyEvent) -> bool {
        let actual = normalize(key);
        self.get_keys(view, action)
            .iter()
            .filter_map(|key_str| parse_key(key_str).ok())
            .any(|expected| normalize(&expected) == actual)
    }

    fn get_keys(&self, view: ViewType, action: Action) -> &[String] {
        let list = &self.task_list;
        match (view, action) {
            (ViewType::TaskList, Action::Quit) => &list.quit,
            (ViewType::TaskList, Action::Down) => &list.down,
            (ViewType::TaskList, Action::Up) => &list.up,
            (ViewType::TaskList, Action::NewTask) => &list.new_task,
            (ViewType::TaskList, Action::Toggle) => &list.toggle,
            (ViewType::TaskList, Action::Delete) => &list.delete,
            (ViewType::TaskList, Action::FilterAll) => &list.filter_all,
            (ViewType::TaskList, Action::FilterActive) => &list.filter_active,
            (ViewType::TaskList, Action::FilterCompleted) => &list.filter_completed,
            (ViewType::TaskList, Action::NextFilter) => &list.next_filter,
            (ViewType::TaskList, Action::PrevFilter) => &list.prev_filter,
            (ViewType::Input, Action::Submit) => &self.input.submit,
            (ViewType::Input, Action::Cancel) => &self.input.cancel,
            _ => &[],
        }
    }
}

fn first_key_label(keys: &[String]) -> String {
    keys.first().map_or_else(|| "?".to_string(), |key| key_label(key))
}

fn key_label(key: &str) -> String {
    if let Some((_, _, label)) = NAMED_KEYS.iter().find(|(name, _, _)| *name == key) {
        return (*label).to_string();
    }
    if key.len() > 1 && key.contains('+') {
        return key.replace('+', "-");
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_keybindings() {
        let config = KeyBindingsConfig::default();

        assert_eq!(config.task_list.quit, vec!["q", "Esc"]);
        assert_eq!(config.task_list.down, vec!["j", "Down"]);
        assert_eq!(config.task_list.up, vec!["k", "Up"]);
        assert_eq!(config.task_list.new_task, vec!["a", "n"]);
        assert_eq!(config.task_list.toggle, vec!["Space", "Enter"]);
        assert_eq!(config.task_list.delete, vec!["d", "Delete"]);
        assert_eq!(config.input.submit, vec!["Enter"]);
        assert_eq!(config.input.cancel, vec!["Esc"]);
    }

    #[test]
    fn test_defaults_are_valid() {
        validate_keybindings_config(&KeyBindingsConfig::default()).unwrap();
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: KeyBindingsConfig = toml::from_str(
            r#"
            [task_list]
            delete = ["x"]
            "#,
        )
        .unwrap();

        assert_eq!(config.task_list.delete, vec!["x"]);
        assert_eq!(config.task_list.quit, vec!["q", "Esc"]);
        assert_eq!(config.input, InputKeyBindings::default());
    }

    #[test]
    fn test_parse_simple_key() {
        let key = parse_key("j").unwrap();
        assert_eq!(key.code, KeyCode::Char('j'));
        assert_eq!(key.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("Enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key("Space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key("BackTab").unwrap().code, KeyCode::BackTab);
        assert_eq!(parse_key("+").unwrap().code, KeyCode::Char('+'));
    }

    #[test]
    fn test_parse_modified_key() {
        let key = parse_key("Ctrl+d").unwrap();
        assert_eq!(key.code, KeyCode::Char('d'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_invalid_key() {
        assert!(parse_key("InvalidKey").is_err());
        assert!(parse_key("").is_err());
        assert!(parse_key("Hyper+j").is_err());
    }

    #[test]
    fn test_matches_ignores_shift_on_characters() {
        let config = KeyBindingsConfig::default();
        let shifted_f = KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT);
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);

        assert!(config.matches(ViewType::TaskList, Action::PrevFilter, &shifted_f));
        assert!(config.matches(ViewType::TaskList, Action::PrevFilter, &back_tab));
        assert!(!config.matches(ViewType::TaskList, Action::NextFilter, &shifted_f));
    }

    #[test]
    fn test_matches_respects_control() {
        let config = KeyBindingsConfig::default();
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert!(!config.matches(ViewType::TaskList, Action::Delete, &ctrl_d));
    }

    #[test]
    fn test_actions_do_not_leak_across_views() {
        let config = KeyBindingsConfig::default();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(config.matches(ViewType::Input, Action::Submit, &enter));
        assert!(!config.matches(ViewType::Input, Action::Toggle, &enter));
        assert!(!config.matches(ViewType::TaskList, Action::Submit, &enter));
    }

    #[test]
    fn test_conflicting_keys_are_rejected() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.delete = vec_of_strings!["j"];
        let err = validate_keybindings_config(&config).unwrap_err();
        assert!(err.to_string().contains("task_list"));
    }

    #[test]
    fn test_empty_binding_is_rejected() {
        let mut config = KeyBindingsConfig::default();
        config.input.submit.clear();
        let err = validate_keybindings_config(&config).unwrap_err();
        assert_eq!(err.to_string(), "input.submit must have at least one key binding");
    }

    #[test]
    fn test_invalid_key_is_reported_with_location() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.toggle = vec_of_strings!["Spacebar"];
        let err = validate_keybindings_config(&config).unwrap_err();
        assert_eq!(err.to_string(), "Invalid key 'Spacebar' in task_list.toggle");
    }

    #[test]
    fn test_help_text_uses_first_keys() {
        let config = KeyBindingsConfig::default();
        let help = config.generate_help_text(ViewType::TaskList);
        assert!(help.starts_with("j/k:move a:new Space:done/undo d:delete"));
        assert_eq!(config.generate_help_text(ViewType::Input), "↵:add Esc:cancel");
    }
}
