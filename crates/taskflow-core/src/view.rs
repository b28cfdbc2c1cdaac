//! Derived view state over the task cache.
//!
//! Filtering and sorting are pure functions of (collection, filter, sort
//! order) and are recomputed on every call; the derived view is never a
//! source of truth.

use crate::task::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Which tasks the derived view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Filter predicate: All is the identity, Active keeps everything not
    /// completed, Completed keeps only completed tasks.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => task.status != TaskStatus::Completed,
            Self::Completed => task.status == TaskStatus::Completed,
        }
    }
}

/// Sort order over the creation timestamp. Newest-first by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Outcome state of the collection load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Applies the filter predicate, then stable-sorts by creation timestamp.
///
/// `sort_by` is a stable sort, so tasks with identical timestamps retain
/// their relative insertion order in both directions.
pub fn filtered_sorted(tasks: &[Task], filter: TaskFilter, order: SortOrder) -> Vec<Task> {
    let mut view: Vec<Task> = tasks.iter().filter(|t| filter.matches(t)).cloned().collect();
    match order {
        SortOrder::Ascending => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Descending => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, TaskId};
    use chrono::{TimeZone, Utc};

    fn task(id: &str, status: TaskStatus, minute: u32) -> Task {
        Task {
            id: TaskId::new(id),
            title: format!("task {}", id),
            description: String::new(),
            priority: Priority::Medium,
            status,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, 0).unwrap(),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_pure_same_input_same_output() {
        let tasks = vec![
            task("1", TaskStatus::Active, 0),
            task("2", TaskStatus::Completed, 1),
        ];
        let first = filtered_sorted(&tasks, TaskFilter::All, SortOrder::Descending);
        let second = filtered_sorted(&tasks, TaskFilter::All, SortOrder::Descending);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ascending_and_descending_by_created_at() {
        let tasks = vec![
            task("b", TaskStatus::Active, 5),
            task("a", TaskStatus::Active, 1),
            task("c", TaskStatus::Active, 9),
        ];
        let asc = filtered_sorted(&tasks, TaskFilter::All, SortOrder::Ascending);
        assert!(asc.windows(2).all(|w| w[0].created_at <= w[1].created_at));
        assert_eq!(ids(&asc), vec!["a", "b", "c"]);

        let desc = filtered_sorted(&tasks, TaskFilter::All, SortOrder::Descending);
        assert!(desc.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(ids(&desc), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let tasks = vec![
            task("first", TaskStatus::Active, 3),
            task("second", TaskStatus::Active, 3),
            task("third", TaskStatus::Active, 3),
        ];
        let asc = filtered_sorted(&tasks, TaskFilter::All, SortOrder::Ascending);
        assert_eq!(ids(&asc), vec!["first", "second", "third"]);
        let desc = filtered_sorted(&tasks, TaskFilter::All, SortOrder::Descending);
        assert_eq!(ids(&desc), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_filters() {
        let tasks = vec![
            task("1", TaskStatus::Active, 0),
            task("2", TaskStatus::Completed, 1),
            task("3", TaskStatus::Active, 2),
        ];
        let all = filtered_sorted(&tasks, TaskFilter::All, SortOrder::Ascending);
        assert_eq!(all.len(), 3);

        let active = filtered_sorted(&tasks, TaskFilter::Active, SortOrder::Ascending);
        assert!(active.iter().all(|t| t.status != TaskStatus::Completed));
        assert_eq!(active.len(), 2);

        let completed = filtered_sorted(&tasks, TaskFilter::Completed, SortOrder::Ascending);
        assert!(completed.iter().all(|t| t.status == TaskStatus::Completed));
        assert_eq!(ids(&completed), vec!["2"]);
    }

    #[test]
    fn test_active_filter_with_descending_sort_scenario() {
        // id 1 active at T1, id 2 completed at T2 > T1: the active view must
        // contain exactly task 1 regardless of sort direction.
        let tasks = vec![
            task("1", TaskStatus::Active, 1),
            task("2", TaskStatus::Completed, 2),
        ];
        let view = filtered_sorted(&tasks, TaskFilter::Active, SortOrder::Descending);
        assert_eq!(ids(&view), vec!["1"]);
    }

    #[test]
    fn test_defaults_match_initial_view_state() {
        assert_eq!(TaskFilter::default(), TaskFilter::All);
        assert_eq!(SortOrder::default(), SortOrder::Descending);
        assert_eq!(LoadStatus::default(), LoadStatus::Idle);
    }
}
