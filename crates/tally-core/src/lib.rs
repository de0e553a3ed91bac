//! Domain types and the in-memory task list store for tally.
//!
//! [`TaskListStore`] owns the ordered task sequence and the current
//! [`FilterMode`]. Its mutations are total: blank text and unknown ids are
//! ignored rather than reported. [`TaskListStore::filtered_view`] is a pure
//! function of the two and returns a fresh `Vec` on every call.

/// Parse errors for user-supplied values.
pub mod error;
/// Filter selector.
pub mod filter;
/// Identifier types.
pub mod id;
/// The task list store.
pub mod store;
/// Task records.
pub mod task;
/// Display format for creation times.
pub mod time_format;

pub use error::{ParseFilterModeError, TimeFormatError};
pub use filter::FilterMode;
pub use id::TaskId;
pub use store::{TaskCounts, TaskListStore};
pub use task::Task;
pub use time_format::{DEFAULT_TIME_FORMAT, TimeFormat};
