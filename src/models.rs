//! Frontend Models
//!
//! Data structures shared by the stores and the views.

use serde::{Deserialize, Serialize};

/// A user-created to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

impl Task {
    pub fn new(id: u64, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
        }
    }
}

/// View selector over the task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Filter buttons in display order
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    /// Order-preserving subsequence of `tasks` selected by this filter
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    /// Message shown when the filtered list is empty
    pub fn empty_message(&self) -> &'static str {
        match self {
            TaskFilter::All => "No tasks yet. Add one above to get started.",
            TaskFilter::Active => "Nothing left to do.",
            TaskFilter::Completed => "No completed tasks yet.",
        }
    }
}

/// Task counts shown in the filter bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }

    pub fn count_for(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.total,
            TaskFilter::Active => self.active,
            TaskFilter::Completed => self.completed,
        }
    }

    /// "1 task left" / "3 tasks left"
    pub fn remaining_label(&self) -> String {
        let noun = if self.active == 1 { "task" } else { "tasks" };
        format!("{} {} left", self.active, noun)
    }
}

/// A static, read-only article record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub body: &'static str,
    pub user_id: u32,
}

impl Article {
    /// Case-insensitive match on title or body; `needle` must already be lowercase
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.body.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, completed: bool) -> Task {
        Task {
            completed,
            ..Task::new(id, format!("Task {}", id), id as i64)
        }
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let json = serde_json::to_string(&Task::new(3, "Write docs", 1_700_000_000_000)).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"text":"Write docs","completed":false,"createdAt":1700000000000}"#
        );
    }

    #[test]
    fn test_filter_preserves_order() {
        let tasks = vec![task(1, false), task(2, true), task(3, false), task(4, true)];

        let active: Vec<u64> = TaskFilter::Active.apply(&tasks).iter().map(|t| t.id).collect();
        let done: Vec<u64> = TaskFilter::Completed.apply(&tasks).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![1, 3]);
        assert_eq!(done, vec![2, 4]);
        assert_eq!(TaskFilter::All.apply(&tasks), tasks);
    }

    #[test]
    fn test_stats() {
        let stats = TaskStats::from_tasks(&[task(1, false), task(2, true), task(3, false)]);
        assert_eq!(stats, TaskStats { total: 3, active: 2, completed: 1 });
        assert_eq!(stats.count_for(TaskFilter::Completed), 1);
        assert_eq!(stats.remaining_label(), "2 tasks left");

        let one = TaskStats::from_tasks(&[task(1, false)]);
        assert_eq!(one.remaining_label(), "1 task left");
    }

    #[test]
    fn test_filter_serialization() {
        assert_eq!(serde_json::to_string(&TaskFilter::Active).unwrap(), r#""active""#);
        let parsed: TaskFilter = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(parsed, TaskFilter::Completed);
    }
}
