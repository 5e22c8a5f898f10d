use crate::config::TaskLimits;
use crate::normalize::{
    normalize_difficulty, normalize_status, parse_due_date, sanitize_description, sanitize_title,
};
use crate::task::{Status, Task};
use chrono::Local;
use log::debug;

/// In-memory task store. Tasks keep their creation order and ids are never
/// reused.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    tasks: Vec<Task>,
    next_id: u32,
    limits: TaskLimits,
}

impl Default for TaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository {
    pub fn new() -> Self {
        Self::with_limits(TaskLimits::default())
    }

    pub fn with_limits(limits: TaskLimits) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            limits,
        }
    }

    /// Builds a task from raw user input and stores it.
    ///
    /// Nothing here fails: unknown status or difficulty text falls back to
    /// the defaults, and an unparsable due date is dropped.
    pub fn create_task(
        &mut self,
        title: &str,
        description: &str,
        difficulty: &str,
        due_date: &str,
        status: &str,
    ) -> &Task {
        let curr_id = self.next_id;
        let task = Task::new(
            curr_id,
            sanitize_title(title, self.limits.title_max_chars),
            sanitize_description(description, self.limits.description_max_chars),
            normalize_status(status).unwrap_or_default(),
            normalize_difficulty(difficulty).unwrap_or_default(),
            parse_due_date(due_date),
            Local::now(),
        );
        debug!(
            "Created task {} ({}, {})",
            curr_id,
            task.status(),
            task.difficulty()
        );

        let index = self.tasks.len();
        self.tasks.push(task);
        self.next_id += 1;
        &self.tasks[index]
    }

    /// Tasks in creation order, optionally only those with `status`.
    pub fn list_tasks(&self, status: Option<Status>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| status.is_none_or(|wanted| task.status() == wanted))
            .collect()
    }

    pub fn find_task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}


#[cfg(test)]
mod next_id_tests {
    use super::*;

    #[test]
    fn test_new_repository_starts_with_id_one() {
        let repo = TaskRepository::new();
        assert_eq!(
            repo.next_id, 1,
            "New repository should start with next_id = 1"
        );
    }

    #[test]
    fn test_next_id_increments_after_creating_task() {
        let mut repo = TaskRepository::new();

        let id = repo.create_task("Test task", "", "", "", "").id();

        assert_eq!(id, 1, "First task should have ID 1");
        assert_eq!(repo.next_id, 2, "next_id should be incremented to 2");
    }

    #[test]
    fn test_sequential_ids_have_no_gaps() {
        let mut repo = TaskRepository::new();

        let ids: Vec<u32> = (0..25)
            .map(|n| repo.create_task(&format!("Task {}", n), "", "", "", "").id())
            .collect();

        assert_eq!(ids, (1..=25).collect::<Vec<u32>>());
        assert_eq!(repo.next_id, 26, "next_id should be one past the last id");
    }

    #[test]
    fn test_create_task_uses_next_id() {
        let mut repo = TaskRepository::new();

        // Manually set next_id to a custom value
        repo.next_id = 42;

        let id = repo.create_task("Task with custom ID", "", "", "", "").id();

        assert_eq!(
            id, 42,
            "Task should have been assigned the current next_id value"
        );
        assert_eq!(repo.next_id, 43, "next_id should have been incremented");
        assert!(
            repo.find_task(42).is_some(),
            "Task should be stored with ID 42"
        );
    }
}
