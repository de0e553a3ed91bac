use time::OffsetDateTime;
use tracing::{debug, trace};

use crate::filter::FilterMode;
use crate::id::TaskId;
use crate::task::Task;

/// Number of tasks per filter mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Every task.
    pub all: usize,
    /// Tasks not yet completed.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
}

impl TaskCounts {
    /// Count belonging to `mode`.
    #[must_use]
    pub const fn for_mode(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Active => self.active,
            FilterMode::Completed => self.completed,
        }
    }
}

/// Ordered task list plus the current filter selection.
///
/// Every mutation is total: blank text and unknown ids are ignored.
#[derive(Debug, Clone, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    filter: FilterMode,
}

impl TaskListStore {
    /// Empty store showing every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store starting with the given filter selected.
    #[must_use]
    pub const fn with_filter(filter: FilterMode) -> Self {
        Self {
            tasks: Vec::new(),
            filter,
        }
    }

    /// Append a task stamped with the current local time.
    ///
    /// Returns the new id, or `None` when `text` is blank.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        self.add_task_at(text, now())
    }

    /// Append a task with an explicit creation time.
    pub fn add_task_at(&mut self, text: &str, created_at: OffsetDateTime) -> Option<TaskId> {
        let Some(task) = Task::new(text, created_at) else {
            trace!("ignoring blank task text");
            return None;
        };
        let id = task.id;
        debug!(task = %id.short(), text = %task.text, "task added");
        self.tasks.push(task);
        Some(id)
    }

    /// Flip the completion flag of `id`. Returns whether a task matched.
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle();
                debug!(task = %id.short(), completed = task.completed, "task toggled");
                true
            }
            None => {
                trace!(task = %id.short(), "toggle ignored for unknown task");
                false
            }
        }
    }

    /// Remove `id` permanently. Returns whether a task matched.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(pos) = self.tasks.iter().position(|task| task.id == id) else {
            trace!(task = %id.short(), "delete ignored for unknown task");
            return false;
        };
        // `remove` keeps the relative order of the remaining tasks.
        self.tasks.remove(pos);
        debug!(task = %id.short(), "task deleted");
        true
    }

    /// Replace the current filter selection.
    pub fn set_filter(&mut self, mode: FilterMode) {
        if self.filter != mode {
            debug!(from = %self.filter, to = %mode, "filter changed");
        }
        self.filter = mode;
    }

    /// Current filter selection.
    #[must_use]
    pub const fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Tasks matching the current filter, in insertion order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<Task> {
        self.view_for(self.filter)
    }

    /// Tasks matching `mode`, in insertion order, regardless of the selection.
    #[must_use]
    pub fn view_for(&self, mode: FilterMode) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| mode.matches(task))
            .cloned()
            .collect()
    }

    /// Every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Total number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Per-mode totals.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskCounts {
            all: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }
}

fn now() -> OffsetDateTime {
    // The local offset is unavailable in some environments (e.g. multi-threaded on Unix).
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
