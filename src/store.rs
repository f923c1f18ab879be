use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::project::Project;
use crate::settings::Settings;
use crate::task::{Assignee, Priority, Status, Task};
use crate::team::TeamMember;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read or write board file: {0}")]
    Io(#[from] std::io::Error),
    #[error("board file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The in-memory authoritative task collection for the session. Insertion
/// order is the display order everywhere downstream.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
}

/// Fields supplied when creating a task; id, status and created_at are
/// filled in by the store.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub project: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub category: String,
    pub assignee: Option<Assignee>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |m| m + 1);
        TaskStore { tasks, next_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Add a task with a generated id and default status To Do.
    pub fn add_task(&mut self, new: NewTask) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title: new.title,
            description: new.description,
            project: new.project,
            status: Status::ToDo,
            priority: new.priority,
            due_date: new.due_date,
            category: new.category,
            assignee: new.assignee,
            created_at: Local::now().date_naive(),
        });
        info!(id, "task added");
        id
    }

    /// The single write path used by the kanban move handler. Returns `false`
    /// for an id not in the store; callers are expected to pass ids sourced
    /// from the current store, so that case is logged as a caller error.
    pub fn set_task_status(&mut self, id: u32, status: Status) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => {
                warn!(id, "set_task_status called with unknown task id");
                false
            }
        }
    }

    /// Project names present in the store, in first-appearance order.
    pub fn project_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for task in &self.tasks {
            if !names.contains(&task.project) {
                names.push(task.project.clone());
            }
        }
        names
    }
}

/// Everything persisted between sessions, in one pretty-printed JSON file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Board {
    pub store: TaskStore,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub settings: Settings,
}

impl Board {
    pub fn save_to_file(&self, path: &Path) -> Result<(), StoreError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Missing file yields an empty board; a present but unreadable file is
    /// an error rather than silently discarded data.
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Board::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
