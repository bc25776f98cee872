//! Task list state and pure reducers.
//!
//! # Design
//! - The collection mirrors server order; reducers never reorder it.
//! - Ids are unique within the collection.
//! - Filtering is derived on read, never stored.

use taskpad_api_models::{Task, TaskFilter, TaskId};

/// Task collection plus the active view filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TasksState {
    /// Tasks in server order.
    pub tasks: Vec<Task>,
    /// Active view filter.
    pub filter: TaskFilter,
}

/// Replace the collection with a fresh server snapshot.
///
/// A repeated id keeps the position of its first occurrence and the data of its last.
pub fn set_tasks(state: &mut TasksState, tasks: Vec<Task>) {
    let mut unique: Vec<Task> = Vec::with_capacity(tasks.len());
    for task in tasks {
        match unique.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => unique.push(task),
        }
    }
    state.tasks = unique;
}

/// Append a newly created task, or replace the entry with the same id.
pub fn upsert_task(state: &mut TasksState, task: Task) {
    match state.tasks.iter_mut().find(|existing| existing.id == task.id) {
        Some(existing) => *existing = task,
        None => state.tasks.push(task),
    }
}

/// Set the completion flag of the matching task. Returns whether a task matched.
pub fn set_completed(state: &mut TasksState, id: TaskId, completed: bool) -> bool {
    state
        .tasks
        .iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.completed = completed)
        .is_some()
}

/// Remove the matching task. Returns whether a task matched.
pub fn remove_task(state: &mut TasksState, id: TaskId) -> bool {
    let before = state.tasks.len();
    state.tasks.retain(|task| task.id != id);
    state.tasks.len() != before
}

/// Change the active filter.
pub const fn set_filter(state: &mut TasksState, filter: TaskFilter) {
    state.filter = filter;
}

/// Drop everything held for the current user.
pub fn clear(state: &mut TasksState) {
    *state = TasksState::default();
}

/// Tasks matching `filter`, in collection order.
#[must_use]
pub fn visible_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}

/// Selector for the filtered view of the store slice.
#[must_use]
pub fn select_visible_tasks(state: &TasksState) -> Vec<Task> {
    visible_tasks(&state.tasks, state.filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: TaskId, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            completed,
        }
    }

    fn sample() -> Vec<Task> {
        vec![task(1, "Task 1", false), task(2, "Task 2", true)]
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|task| task.id).collect()
    }

    #[test]
    fn filters_partition_by_completion() {
        let tasks = sample();
        assert_eq!(ids(&visible_tasks(&tasks, TaskFilter::Active)), vec![1]);
        assert_eq!(ids(&visible_tasks(&tasks, TaskFilter::Completed)), vec![2]);
        assert_eq!(ids(&visible_tasks(&tasks, TaskFilter::All)), vec![1, 2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let tasks = sample();
        let once = visible_tasks(&tasks, TaskFilter::Active);
        assert_eq!(visible_tasks(&once, TaskFilter::Active), once);
    }

    #[test]
    fn set_tasks_collapses_duplicate_ids() {
        let mut state = TasksState::default();
        set_tasks(
            &mut state,
            vec![
                task(1, "old", false),
                task(2, "Task 2", false),
                task(1, "new", true),
            ],
        );
        assert_eq!(state.tasks, vec![task(1, "new", true), task(2, "Task 2", false)]);
    }

    #[test]
    fn upsert_appends_then_replaces() {
        let mut state = TasksState::default();
        set_tasks(&mut state, sample());
        upsert_task(&mut state, task(3, "Task 3", false));
        assert_eq!(ids(&state.tasks), vec![1, 2, 3]);
        upsert_task(&mut state, task(1, "renamed", false));
        assert_eq!(ids(&state.tasks), vec![1, 2, 3]);
        assert_eq!(state.tasks[0].title, "renamed");
    }

    #[test]
    fn set_completed_and_remove_touch_only_the_matching_task() {
        let mut state = TasksState::default();
        set_tasks(&mut state, sample());

        assert!(set_completed(&mut state, 1, true));
        assert!(state.tasks.iter().all(|task| task.completed));
        assert!(!set_completed(&mut state, 42, false));

        assert!(remove_task(&mut state, 2));
        assert_eq!(ids(&state.tasks), vec![1]);
        assert!(!remove_task(&mut state, 2));
    }

    #[test]
    fn selector_follows_filter_and_clear_resets() {
        let mut state = TasksState::default();
        set_tasks(&mut state, sample());
        set_filter(&mut state, TaskFilter::Completed);
        assert_eq!(ids(&select_visible_tasks(&state)), vec![2]);

        clear(&mut state);
        assert_eq!(state, TasksState::default());
        assert_eq!(state.filter, TaskFilter::All);
    }
}
