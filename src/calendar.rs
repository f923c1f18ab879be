//! Calendar derivations: which tasks fall in a given month or week.

use chrono::{Datelike, Days, NaiveDate};

use crate::task::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalendarMode {
    #[default]
    Monthly,
    Weekly,
}

impl CalendarMode {
    pub fn toggled(self) -> Self {
        match self {
            CalendarMode::Monthly => CalendarMode::Weekly,
            CalendarMode::Weekly => CalendarMode::Monthly,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CalendarMode::Monthly => "Monthly",
            CalendarMode::Weekly => "Weekly",
        }
    }
}

/// Tasks due in the given calendar month, in store order.
pub fn tasks_in_month<'a>(tasks: &'a [Task], year: i32, month: u32) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.due_date.year() == year && t.due_date.month() == month)
        .collect()
}

/// The Sunday-through-Saturday week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(back)).unwrap_or(date);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

/// Tasks due in the week containing `date`, in store order.
pub fn tasks_in_week<'a>(tasks: &'a [Task], date: NaiveDate) -> Vec<&'a Task> {
    let (start, end) = week_bounds(date);
    tasks
        .iter()
        .filter(|t| t.due_date >= start && t.due_date <= end)
        .collect()
}

/// The derivation behind the calendar page for the current mode.
pub fn tasks_for_view<'a>(tasks: &'a [Task], mode: CalendarMode, today: NaiveDate) -> Vec<&'a Task> {
    match mode {
        CalendarMode::Monthly => tasks_in_month(tasks, today.year(), today.month()),
        CalendarMode::Weekly => tasks_in_week(tasks, today),
    }
}
