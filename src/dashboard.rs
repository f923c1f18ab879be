//! Dashboard derivations: status summary counts and the today's / upcoming
//! task partitions. All pure; recomputed from the store on every render.

use chrono::NaiveDate;

use crate::task::{Status, Task};

/// The three headline counters of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
}

/// Counted by status only, so each task lands in at most one counter and
/// the Overdue number agrees with filtering by status = Overdue.
pub fn summary(tasks: &[Task]) -> Summary {
    let mut out = Summary::default();
    for task in tasks {
        match task.status {
            Status::Completed => out.completed += 1,
            Status::InProgress => out.in_progress += 1,
            Status::Overdue => out.overdue += 1,
            Status::ToDo => {}
        }
    }
    out
}

/// Tasks due exactly today, in store order.
pub fn due_today<'a>(tasks: &'a [Task], today: NaiveDate) -> Vec<&'a Task> {
    tasks.iter().filter(|t| t.due_date == today).collect()
}

/// Open tasks due strictly after today, in store order.
pub fn upcoming<'a>(tasks: &'a [Task], today: NaiveDate) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.due_date > today && t.status != Status::Completed)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: u32, status: Status, due: NaiveDate) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: None,
            project: "Project Alpha".into(),
            status,
            priority: Priority::Medium,
            due_date: due,
            category: "Planning".into(),
            assignee: None,
            created_at: date(2024, 3, 1),
        }
    }

    #[test]
    fn summary_counts_by_status() {
        let tasks = vec![
            task(1, Status::Completed, date(2024, 3, 1)),
            task(2, Status::Completed, date(2024, 3, 2)),
            task(3, Status::InProgress, date(2024, 3, 10)),
            task(4, Status::Overdue, date(2024, 3, 1)),
            task(5, Status::ToDo, date(2024, 4, 1)),
        ];
        assert_eq!(
            summary(&tasks),
            Summary {
                completed: 2,
                in_progress: 1,
                overdue: 1,
            }
        );
    }

    #[test]
    fn past_due_open_tasks_count_once_by_their_status() {
        // Past its due date but still In Progress: it shows up in the
        // in-progress counter only, never in two counters at once.
        let tasks = vec![
            task(1, Status::InProgress, date(2024, 3, 5)),
            task(2, Status::ToDo, date(2024, 3, 5)),
        ];
        let s = summary(&tasks);
        assert_eq!(s.in_progress, 1);
        assert_eq!(s.overdue, 0);
        assert!(s.completed + s.in_progress + s.overdue <= tasks.len());
    }

    #[test]
    fn today_and_upcoming_partition_by_due_date() {
        let today = date(2024, 3, 10);
        let tasks = vec![
            task(1, Status::ToDo, today),
            task(2, Status::ToDo, date(2024, 3, 11)),
            task(3, Status::Completed, date(2024, 3, 12)),
            task(4, Status::InProgress, date(2024, 3, 9)),
        ];
        let today_ids: Vec<u32> = due_today(&tasks, today).iter().map(|t| t.id).collect();
        let upcoming_ids: Vec<u32> = upcoming(&tasks, today).iter().map(|t| t.id).collect();
        assert_eq!(today_ids, vec![1]);
        // Completed tasks drop out of upcoming; past-due ones are not upcoming.
        assert_eq!(upcoming_ids, vec![2]);
    }
}
