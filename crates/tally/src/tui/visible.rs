use tally_core::{Task, TaskId};

/// The filtered view currently on screen plus the selected row.
#[derive(Debug, Default)]
pub(super) struct VisibleTasks {
    tasks: Vec<Task>,
    selected: usize,
}

#[allow(clippy::missing_const_for_fn)]
impl VisibleTasks {
    /// Replace the rows with a freshly computed view.
    ///
    /// Selection stays on `preferred` when it is still visible, otherwise the
    /// previous index is clamped to the new length.
    pub(super) fn rebuild(&mut self, tasks: Vec<Task>, preferred: Option<TaskId>) {
        self.tasks = tasks;
        self.selected = self.resolve_selection(preferred);
    }

    fn resolve_selection(&self, preferred: Option<TaskId>) -> usize {
        if self.tasks.is_empty() {
            return 0;
        }
        if let Some(id) = preferred
            && let Some(index) = self.position(id)
        {
            return index;
        }
        self.selected.min(self.tasks.len() - 1)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub(super) fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(super) fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub(super) fn selected_index(&self) -> usize {
        self.selected
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }

    pub(super) fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    pub(super) fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
