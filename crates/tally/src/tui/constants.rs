//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Title of the input block.
pub const APP_TITLE: &str = "Todo App";
/// Placeholder shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "Add new todo";
/// Highlight symbol shown beside the selected row.
pub const TASK_TABLE_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Width of the time column.
pub const TIME_COLUMN_WIDTH: u16 = 12;
/// Width of the status column; fits "Not Completed ✘".
pub const STATUS_COLUMN_WIDTH: u16 = 16;
/// Width of the actions column; fits "[Done] [Delete]".
pub const ACTIONS_COLUMN_WIDTH: u16 = 16;
/// Minimum width of the task text column.
pub const TASK_COLUMN_MIN_WIDTH: u16 = 10;
