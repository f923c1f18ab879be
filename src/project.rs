//! Project boards: named projects with a category badge and membership.
//! Progress is derived from the task store by project name, so the board
//! can never disagree with the tasks page.

use serde::{Deserialize, Serialize};

use crate::task::{Status, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Work,
    Personal,
    Study,
    Urgent,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Work,
        ProjectCategory::Personal,
        ProjectCategory::Study,
        ProjectCategory::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Work => "Work",
            ProjectCategory::Personal => "Personal",
            ProjectCategory::Study => "Study",
            ProjectCategory::Urgent => "Urgent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub category: ProjectCategory,
    #[serde(default)]
    pub member_ids: Vec<String>,
}

/// Completed / total task counts for one project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(self) -> u16 {
        if self.total == 0 {
            0
        } else {
            (self.completed * 100 / self.total) as u16
        }
    }
}

pub fn progress(tasks: &[Task], project_name: &str) -> Progress {
    let mut out = Progress::default();
    for task in tasks.iter().filter(|t| t.project == project_name) {
        out.total += 1;
        if task.status == Status::Completed {
            out.completed += 1;
        }
    }
    out
}

/// Add a project with a generated id. Blank names are rejected, matching
/// the form validation of the web original.
pub fn add_project(
    projects: &mut Vec<Project>,
    name: &str,
    category: ProjectCategory,
) -> Option<u32> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let id = projects.iter().map(|p| p.id).max().map_or(1, |m| m + 1);
    projects.push(Project {
        id,
        name: name.to_string(),
        category,
        member_ids: Vec::new(),
    });
    Some(id)
}

/// Assign a team member to a project; idempotent.
pub fn assign_member(project: &mut Project, member_id: &str) {
    if !project.member_ids.iter().any(|m| m == member_id) {
        project.member_ids.push(member_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn task(id: u32, project: &str, status: Status) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: None,
            project: project.into(),
            status,
            priority: Priority::Medium,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            category: "Development".into(),
            assignee: None,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn progress_counts_only_the_named_project() {
        let tasks = vec![
            task(1, "MonTask Frontend Development", Status::Completed),
            task(2, "MonTask Frontend Development", Status::InProgress),
            task(3, "MonTask Frontend Development", Status::ToDo),
            task(4, "API Integration", Status::Completed),
        ];
        let p = progress(&tasks, "MonTask Frontend Development");
        assert_eq!(p, Progress { completed: 1, total: 3 });
        assert_eq!(p.percent(), 33);
        assert_eq!(progress(&tasks, "API Integration").percent(), 100);
        assert_eq!(progress(&tasks, "Nothing Here").percent(), 0);
    }

    #[test]
    fn add_project_rejects_blank_names_and_generates_ids() {
        let mut projects = Vec::new();
        assert_eq!(add_project(&mut projects, "   ", ProjectCategory::Work), None);
        let a = add_project(&mut projects, "MonTask Frontend Development", ProjectCategory::Work);
        let b = add_project(&mut projects, "API Integration", ProjectCategory::Urgent);
        assert_eq!(a, Some(1));
        assert_eq!(b, Some(2));
        assert_eq!(projects.len(), 2);
    }

    #[test]
    fn assign_member_is_idempotent() {
        let mut projects = Vec::new();
        add_project(&mut projects, "Demo", ProjectCategory::Study).unwrap();
        assign_member(&mut projects[0], "u1");
        assign_member(&mut projects[0], "u1");
        assign_member(&mut projects[0], "u2");
        assert_eq!(projects[0].member_ids, vec!["u1".to_string(), "u2".to_string()]);
    }
}
