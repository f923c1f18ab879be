//! Pure task filtering: the view recomputes this on every store or
//! criteria change, so `apply` must be deterministic and order-preserving.

use chrono::NaiveDate;

use crate::task::{Priority, Status, Task};

/// User-selected constraints narrowing which tasks are displayed. `None`
/// means "All" for the selectors; an empty search term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub project: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub search: String,
}

impl FilterCriteria {
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Whether a single task satisfies every active criterion. Inactive
    /// criteria always pass; a missing description is a non-match for the
    /// search term only, never an error.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(project) = &self.project {
            if task.project != *project {
                return false;
            }
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(due) = self.due_date {
            if task.due_date != due {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_title = task.title.to_lowercase().contains(&needle);
            let in_description = task
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }
        true
    }
}

/// Filter the store down to the tasks matching `criteria`, preserving the
/// store's relative order.
pub fn apply<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    tasks.iter().filter(|t| criteria.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Assignee;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: u32, title: &str, project: &str, status: Status, priority: Priority) -> Task {
        Task {
            id,
            title: title.into(),
            description: None,
            project: project.into(),
            status,
            priority,
            due_date: date(2024, 3, 15),
            category: "Development".into(),
            assignee: None,
            created_at: date(2024, 3, 1),
        }
    }

    fn sample() -> Vec<Task> {
        let mut design = task(
            1,
            "Design new logo",
            "Project Alpha",
            Status::InProgress,
            Priority::High,
        );
        design.description = Some("Create mockups for client review.".into());
        design.assignee = Some(Assignee::named("Alice Wonderland"));
        let mut api = task(
            2,
            "Develop API endpoint for user authentication",
            "Project Beta",
            Status::ToDo,
            Priority::High,
        );
        api.description = Some("Needs JWT implementation.".into());
        api.due_date = date(2024, 3, 20);
        let mut docs = task(
            3,
            "Write documentation for API",
            "Project Alpha",
            Status::ToDo,
            Priority::Medium,
        );
        docs.due_date = date(2024, 3, 25);
        vec![design, api, docs]
    }

    #[test]
    fn empty_criteria_pass_everything_in_order() {
        let tasks = sample();
        let out = apply(&tasks, &FilterCriteria::default());
        let ids: Vec<u32> = out.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn status_filter_selects_exact_matches() {
        let tasks = sample();
        let criteria = FilterCriteria {
            status: Some(Status::ToDo),
            ..Default::default()
        };
        let ids: Vec<u32> = apply(&tasks, &criteria).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let tasks = sample();
        let criteria = FilterCriteria {
            search: "api".into(),
            ..Default::default()
        };
        let ids: Vec<u32> = apply(&tasks, &criteria).iter().map(|t| t.id).collect();
        // "Develop API endpoint..." by title, "Write documentation for API"
        // by title; "Design new logo" matches neither field.
        assert_eq!(ids, vec![2, 3]);

        let criteria = FilterCriteria {
            search: "jwt".into(),
            ..Default::default()
        };
        let ids: Vec<u32> = apply(&tasks, &criteria).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn missing_description_is_a_non_match_not_an_error() {
        let tasks = sample();
        let criteria = FilterCriteria {
            search: "mockups".into(),
            ..Default::default()
        };
        let ids: Vec<u32> = apply(&tasks, &criteria).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn criteria_compose_as_a_conjunction() {
        let tasks = sample();
        let criteria = FilterCriteria {
            project: Some("Project Alpha".into()),
            priority: Some(Priority::High),
            ..Default::default()
        };
        let ids: Vec<u32> = apply(&tasks, &criteria).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn due_date_filter_is_exact_match() {
        let tasks = sample();
        let criteria = FilterCriteria {
            due_date: Some(date(2024, 3, 20)),
            ..Default::default()
        };
        let ids: Vec<u32> = apply(&tasks, &criteria).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let tasks = sample();
        let criteria = FilterCriteria {
            status: Some(Status::ToDo),
            search: "api".into(),
            ..Default::default()
        };
        let once: Vec<Task> = apply(&tasks, &criteria).into_iter().cloned().collect();
        let twice: Vec<Task> = apply(&once, &criteria).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn fully_matching_task_is_always_included() {
        let tasks = sample();
        let criteria = FilterCriteria {
            project: Some("Project Beta".into()),
            status: Some(Status::ToDo),
            priority: Some(Priority::High),
            due_date: Some(date(2024, 3, 20)),
            search: "authentication".into(),
        };
        let ids: Vec<u32> = apply(&tasks, &criteria).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn clear_resets_to_defaults() {
        let mut criteria = FilterCriteria {
            project: Some("Project Alpha".into()),
            search: "logo".into(),
            ..Default::default()
        };
        assert!(!criteria.is_clear());
        criteria.clear();
        assert!(criteria.is_clear());
    }
}
