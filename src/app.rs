use std::io;

use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::Backend,
    layout::{Position, Rect},
    Terminal,
};
use tracing::debug;

use crate::calendar::CalendarMode;
use crate::filter::{self, FilterCriteria};
use crate::kanban::{self, DragState, DropTarget, COLUMNS};
use crate::project::{self, ProjectCategory};
use crate::store::{Board, NewTask};
use crate::task::{Assignee, Priority, Status};
use crate::team;
use crate::ui;

/// The application pages, one per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Tasks,
    Calendar,
    Projects,
    Team,
    Settings,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Tasks,
        Page::Calendar,
        Page::Projects,
        Page::Team,
        Page::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Tasks => "Tasks",
            Page::Calendar => "Calendar",
            Page::Projects => "Projects",
            Page::Team => "Team",
            Page::Settings => "Settings",
        }
    }

    fn index(self) -> usize {
        Page::ALL.iter().position(|&p| p == self).unwrap_or(0)
    }

    fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    fn prev(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// How the Tasks page displays the filtered tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskView {
    #[default]
    List,
    Kanban,
}

impl TaskView {
    pub fn toggled(self) -> TaskView {
        match self {
            TaskView::List => TaskView::Kanban,
            TaskView::Kanban => TaskView::List,
        }
    }
}

/// Screen region of one rendered kanban column, recorded at draw time so
/// mouse events can be resolved to a column or a task card.
#[derive(Debug, Clone)]
pub struct ColumnArea {
    pub area: Rect,
    pub status: Status,
    /// Task ids in rendered row order (one card per row).
    pub task_ids: Vec<u32>,
}

pub struct App {
    pub board: Board,
    pub criteria: FilterCriteria,
    pub page: Page,
    pub task_view: TaskView,
    pub drag: DragState,
    pub calendar_mode: CalendarMode,
    /// Kanban cursor: column index, then card index within that column.
    pub selected_column: usize,
    pub selected_task: usize,
    pub project_cursor: usize,
    pub team_cursor: usize,
    pub settings_cursor: usize,
    /// Refreshed on every draw; consumed by mouse hit-testing.
    pub column_areas: Vec<ColumnArea>,
    pub status_line: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(board: Board) -> Self {
        App {
            board,
            criteria: FilterCriteria::default(),
            page: Page::Dashboard,
            task_view: TaskView::default(),
            drag: DragState::default(),
            calendar_mode: CalendarMode::default(),
            selected_column: 0,
            selected_task: 0,
            project_cursor: 0,
            team_cursor: 0,
            settings_cursor: 0,
            column_areas: Vec::new(),
            status_line: None,
            should_quit: false,
        }
    }

    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Kanban buckets as ids: store -> filter -> partition, recomputed from
    /// scratch so the board always reflects the latest mutation.
    pub fn kanban_ids(&self) -> Vec<Vec<u32>> {
        let filtered = filter::apply(self.board.store.tasks(), &self.criteria);
        kanban::partition(&filtered, &COLUMNS)
            .into_iter()
            .map(|bucket| bucket.into_iter().map(|t| t.id).collect())
            .collect()
    }

    /// The task id under the kanban cursor, if the selected column has one.
    fn selected_task_id(&self) -> Option<u32> {
        let buckets = self.kanban_ids();
        buckets
            .get(self.selected_column)
            .and_then(|b| b.get(self.selected_task))
            .copied()
    }

    fn clamp_kanban_cursor(&mut self) {
        let buckets = self.kanban_ids();
        self.selected_column = self.selected_column.min(COLUMNS.len() - 1);
        let len = buckets.get(self.selected_column).map_or(0, Vec::len);
        self.selected_task = self.selected_task.min(len.saturating_sub(1));
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    app.status_line = None;

    // A grabbed task only responds to drop/cancel keys.
    if app.drag.active_task().is_some() && app.page == Page::Tasks {
        handle_drag_key(app, key.code);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab => app.page = app.page.next(),
        KeyCode::BackTab => app.page = app.page.prev(),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            app.page = Page::ALL[idx];
        }
        _ => match app.page {
            Page::Tasks => handle_tasks_key(app, key.code),
            Page::Calendar => {
                if key.code == KeyCode::Char('v') {
                    app.calendar_mode = app.calendar_mode.toggled();
                }
            }
            Page::Projects => handle_projects_key(app, key.code),
            Page::Team => handle_team_key(app, key.code),
            Page::Settings => handle_settings_key(app, key.code),
            Page::Dashboard => {}
        },
    }
}

/// Keyboard grab-mode: the grabbed task follows the column cursor; Enter
/// drops on the cursor position (card = drop-on-task, empty column = drop
/// on the column itself), Esc cancels with no mutation.
fn handle_drag_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left => {
            app.selected_column = app.selected_column.saturating_sub(1);
            app.clamp_kanban_cursor();
        }
        KeyCode::Right => {
            app.selected_column = (app.selected_column + 1).min(COLUMNS.len() - 1);
            app.clamp_kanban_cursor();
        }
        KeyCode::Up => app.selected_task = app.selected_task.saturating_sub(1),
        KeyCode::Down => {
            app.selected_task += 1;
            app.clamp_kanban_cursor();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let target = match app.selected_task_id() {
                Some(id) => DropTarget::Task(id),
                None => DropTarget::Column(COLUMNS[app.selected_column]),
            };
            finish_drag(app, target);
        }
        KeyCode::Esc => {
            app.drag.cancel();
            app.status_line = Some("Move cancelled".into());
        }
        _ => {}
    }
}

fn finish_drag(app: &mut App, target: DropTarget) {
    let title = app
        .drag
        .active_task()
        .and_then(|id| app.board.store.task(id))
        .map(|t| t.title.clone());
    if let Some(change) = app.drag.end(&mut app.board.store, target) {
        app.status_line = Some(format!(
            "Moved \"{}\" to {}",
            title.unwrap_or_default(),
            change.to
        ));
        app.clamp_kanban_cursor();
    }
}

fn handle_tasks_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('v') => app.task_view = app.task_view.toggled(),
        KeyCode::Char('a') => add_task_interactive(app),
        KeyCode::Char('/') => {
            if let Some(term) = prompt("Search tasks by title or description:") {
                app.criteria.search = term;
            }
        }
        KeyCode::Char('p') => {
            let projects = app.board.store.project_names();
            app.criteria.project = cycle_project(app.criteria.project.take(), &projects);
        }
        KeyCode::Char('s') => app.criteria.status = cycle_status(app.criteria.status),
        KeyCode::Char('r') => app.criteria.priority = cycle_priority(app.criteria.priority),
        KeyCode::Char('d') => {
            match prompt("Filter by due date (YYYY-MM-DD, empty clears):") {
                Some(text) if !text.is_empty() => {
                    match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
                        Ok(date) => app.criteria.due_date = Some(date),
                        Err(_) => app.status_line = Some(format!("Not a date: {text}")),
                    }
                }
                _ => app.criteria.due_date = None,
            }
        }
        KeyCode::Char('c') => app.criteria.clear(),
        KeyCode::Left if app.task_view == TaskView::Kanban => {
            app.selected_column = app.selected_column.saturating_sub(1);
            app.clamp_kanban_cursor();
        }
        KeyCode::Right if app.task_view == TaskView::Kanban => {
            app.selected_column = (app.selected_column + 1).min(COLUMNS.len() - 1);
            app.clamp_kanban_cursor();
        }
        KeyCode::Up if app.task_view == TaskView::Kanban => {
            app.selected_task = app.selected_task.saturating_sub(1);
        }
        KeyCode::Down if app.task_view == TaskView::Kanban => {
            app.selected_task += 1;
            app.clamp_kanban_cursor();
        }
        KeyCode::Enter | KeyCode::Char(' ') if app.task_view == TaskView::Kanban => {
            if let Some(id) = app.selected_task_id() {
                app.drag.begin(id);
                app.status_line = Some("Moving task: arrows to pick a column, Enter to drop, Esc to cancel".into());
            }
        }
        _ => {}
    }
}

fn handle_projects_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up => app.project_cursor = app.project_cursor.saturating_sub(1),
        KeyCode::Down => {
            app.project_cursor = (app.project_cursor + 1)
                .min(app.board.projects.len().saturating_sub(1));
        }
        KeyCode::Char('a') => {
            let Some(name) = prompt("Project name:") else {
                return;
            };
            let category = prompt("Category (work/personal/study/urgent):")
                .and_then(|c| parse_category(&c))
                .unwrap_or(ProjectCategory::Work);
            match project::add_project(&mut app.board.projects, &name, category) {
                Some(_) => app.status_line = Some(format!("Added project \"{}\"", name.trim())),
                None => app.status_line = Some("Project name cannot be empty".into()),
            }
        }
        KeyCode::Char('u') => {
            let Some(proj) = app.board.projects.get_mut(app.project_cursor) else {
                return;
            };
            if let Some(member_id) = prompt("Assign member id (e.g. tm1):") {
                if app.board.team.iter().any(|m| m.id == member_id) {
                    project::assign_member(proj, &member_id);
                } else {
                    app.status_line = Some(format!("No team member with id {member_id}"));
                }
            }
        }
        _ => {}
    }
}

fn handle_team_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up => app.team_cursor = app.team_cursor.saturating_sub(1),
        KeyCode::Down => {
            app.team_cursor = (app.team_cursor + 1).min(app.board.team.len().saturating_sub(1));
        }
        KeyCode::Char('a') => {
            let Some(name) = prompt("Member name:") else {
                return;
            };
            let Some(email) = prompt("Member email:") else {
                return;
            };
            match team::add_member(&mut app.board.team, &name, &email) {
                Some(id) => app.status_line = Some(format!("Added {} as {id}", name.trim())),
                None => app.status_line = Some("Name and email are required".into()),
            }
        }
        KeyCode::Char('r') => {
            if let Some(member) = app.board.team.get(app.team_cursor) {
                let id = member.id.clone();
                let role = member.role.cycled();
                team::set_role(&mut app.board.team, &id, role);
            }
        }
        KeyCode::Char('x') => {
            if let Some(member) = app.board.team.get(app.team_cursor) {
                let id = member.id.clone();
                team::remove_member(&mut app.board.team, &id);
                app.team_cursor = app
                    .team_cursor
                    .min(app.board.team.len().saturating_sub(1));
            }
        }
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, code: KeyCode) {
    let prefs_len = app.board.settings.notifications.entries().len();
    match code {
        KeyCode::Up => app.settings_cursor = app.settings_cursor.saturating_sub(1),
        KeyCode::Down => app.settings_cursor = (app.settings_cursor + 1).min(prefs_len - 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.board.settings.notifications.toggle(app.settings_cursor);
        }
        KeyCode::Char('t') => {
            app.board.settings.theme = app.board.settings.theme.toggled();
        }
        _ => {}
    }
}

/// Pointer drag on the kanban board: button down over a card grabs it,
/// button up resolves the drop target from the release position. Releasing
/// outside every column cancels with no mutation.
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.page != Page::Tasks || app.task_view != TaskView::Kanban {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(DropTarget::Task(id)) = hit_test(app, mouse.column, mouse.row) {
                app.drag.begin(id);
                debug!(id, "drag started");
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.drag.active_task().is_some() {
                let target =
                    hit_test(app, mouse.column, mouse.row).unwrap_or(DropTarget::Outside);
                finish_drag(app, target);
            }
        }
        _ => {}
    }
}

/// Resolve a screen position to the card or column under it, using the
/// regions recorded during the last draw.
fn hit_test(app: &App, x: u16, y: u16) -> Option<DropTarget> {
    for col in &app.column_areas {
        let area = col.area;
        if !area.contains(Position::new(x, y)) {
            continue;
        }
        // Cards render one per row starting under the column's top border.
        let first_row = area.y + 1;
        if y >= first_row {
            let index = (y - first_row) as usize;
            if let Some(&id) = col.task_ids.get(index) {
                return Some(DropTarget::Task(id));
            }
        }
        return Some(DropTarget::Column(col.status));
    }
    None
}

fn add_task_interactive(app: &mut App) {
    let Some(title) = prompt("Task title:") else {
        return;
    };
    if title.is_empty() {
        app.status_line = Some("Task title cannot be empty".into());
        return;
    }
    let project = prompt("Project:")
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "General".to_string());
    let due_date = prompt("Due date (YYYY-MM-DD):")
        .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok())
        .unwrap_or_else(|| app.today());
    let priority = prompt("Priority (high/medium/low):")
        .and_then(|p| parse_priority(&p))
        .unwrap_or(Priority::Medium);
    let category = prompt("Category:").unwrap_or_default();
    let description = prompt("Description (optional):").filter(|d| !d.is_empty());
    let assignee = prompt("Assignee (optional):")
        .filter(|a| !a.is_empty())
        .map(|name| Assignee::named(&name));

    let id = app.board.store.add_task(NewTask {
        title: title.clone(),
        description,
        project,
        priority,
        due_date,
        category,
        assignee,
    });
    app.status_line = Some(format!("Added task #{id}: {title}"));
}

fn parse_priority(text: &str) -> Option<Priority> {
    match text.trim().to_lowercase().as_str() {
        "h" | "high" => Some(Priority::High),
        "m" | "medium" => Some(Priority::Medium),
        "l" | "low" => Some(Priority::Low),
        _ => None,
    }
}

fn parse_category(text: &str) -> Option<ProjectCategory> {
    match text.trim().to_lowercase().as_str() {
        "w" | "work" => Some(ProjectCategory::Work),
        "p" | "personal" => Some(ProjectCategory::Personal),
        "s" | "study" => Some(ProjectCategory::Study),
        "u" | "urgent" => Some(ProjectCategory::Urgent),
        _ => None,
    }
}

/// All / each status in turn / back to All.
fn cycle_status(current: Option<Status>) -> Option<Status> {
    match current {
        None => Some(Status::ALL[0]),
        Some(s) => {
            let idx = Status::ALL.iter().position(|&x| x == s).unwrap_or(0);
            Status::ALL.get(idx + 1).copied()
        }
    }
}

fn cycle_priority(current: Option<Priority>) -> Option<Priority> {
    match current {
        None => Some(Priority::ALL[0]),
        Some(p) => {
            let idx = Priority::ALL.iter().position(|&x| x == p).unwrap_or(0);
            Priority::ALL.get(idx + 1).copied()
        }
    }
}

fn cycle_project(current: Option<String>, projects: &[String]) -> Option<String> {
    match current {
        None => projects.first().cloned(),
        Some(p) => {
            let idx = projects.iter().position(|x| *x == p)?;
            projects.get(idx + 1).cloned()
        }
    }
}

/// Line-based text entry: drop out of raw mode, read a line from stdin,
/// restore raw mode. The next draw repaints over the prompt.
fn prompt(message: &str) -> Option<String> {
    disable_raw_mode().ok();
    println!("{}", message);
    let mut input = String::new();
    let result = io::stdin().read_line(&mut input);
    enable_raw_mode().ok();
    result.ok().map(|_| input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(seed::sample_board())
    }

    #[test]
    fn pages_cycle_forward_and_back() {
        let mut page = Page::Dashboard;
        for _ in 0..Page::ALL.len() {
            page = page.next();
        }
        assert_eq!(page, Page::Dashboard);
        assert_eq!(Page::Dashboard.prev(), Page::Settings);
    }

    #[test]
    fn status_cycle_ends_back_at_all() {
        let mut current = None;
        let mut seen = Vec::new();
        loop {
            current = cycle_status(current);
            match current {
                Some(s) => seen.push(s),
                None => break,
            }
        }
        assert_eq!(seen, Status::ALL.to_vec());
    }

    #[test]
    fn project_cycle_walks_known_projects() {
        let projects = vec!["Project Alpha".to_string(), "Project Beta".to_string()];
        let step1 = cycle_project(None, &projects);
        let step2 = cycle_project(step1.clone(), &projects);
        let step3 = cycle_project(step2.clone(), &projects);
        assert_eq!(step1.as_deref(), Some("Project Alpha"));
        assert_eq!(step2.as_deref(), Some("Project Beta"));
        assert_eq!(step3, None);
    }

    #[test]
    fn kanban_ids_reflect_filter_and_columns() {
        let mut app = app();
        app.criteria.status = Some(Status::ToDo);
        let buckets = app.kanban_ids();
        assert_eq!(buckets.len(), COLUMNS.len());
        assert!(buckets[1].is_empty() && buckets[2].is_empty());
        assert!(!buckets[0].is_empty());
    }

    #[test]
    fn keyboard_grab_and_drop_moves_the_selected_task() {
        let mut app = app();
        app.page = Page::Tasks;
        app.task_view = TaskView::Kanban;
        app.selected_column = 0;
        app.selected_task = 0;
        let id = app.selected_task_id().unwrap();

        handle_tasks_key(&mut app, KeyCode::Enter);
        assert_eq!(app.drag.active_task(), Some(id));

        // Walk the cursor to the Completed column and drop.
        handle_drag_key(&mut app, KeyCode::Right);
        handle_drag_key(&mut app, KeyCode::Right);
        handle_drag_key(&mut app, KeyCode::Enter);
        assert_eq!(app.drag.active_task(), None);
        assert_eq!(app.board.store.task(id).unwrap().status, Status::Completed);
    }

    #[test]
    fn escape_cancels_a_grab_without_mutation() {
        let mut app = app();
        app.page = Page::Tasks;
        app.task_view = TaskView::Kanban;
        let before: Vec<_> = app.board.store.tasks().to_vec();
        handle_tasks_key(&mut app, KeyCode::Enter);
        handle_drag_key(&mut app, KeyCode::Esc);
        assert_eq!(app.drag.active_task(), None);
        assert_eq!(app.board.store.tasks(), &before[..]);
    }

    #[test]
    fn mouse_release_outside_columns_is_a_no_op() {
        let mut app = app();
        app.page = Page::Tasks;
        app.task_view = TaskView::Kanban;
        let before: Vec<_> = app.board.store.tasks().to_vec();
        let id = app.kanban_ids()[0][0];
        app.drag.begin(id);
        // No column areas recorded: every position misses.
        assert_eq!(hit_test(&app, 10, 10), None);
        finish_drag(&mut app, DropTarget::Outside);
        assert_eq!(app.board.store.tasks(), &before[..]);
    }

    #[test]
    fn hit_test_distinguishes_cards_from_column_space() {
        let mut app = app();
        app.column_areas = vec![ColumnArea {
            area: Rect::new(0, 5, 20, 10),
            status: Status::ToDo,
            task_ids: vec![7, 8],
        }];
        // Row 6 is the first card, row 7 the second, row 9 empty column space.
        assert_eq!(hit_test(&app, 3, 6), Some(DropTarget::Task(7)));
        assert_eq!(hit_test(&app, 3, 7), Some(DropTarget::Task(8)));
        assert_eq!(hit_test(&app, 3, 9), Some(DropTarget::Column(Status::ToDo)));
        // The right edge is exclusive: width 20 means columns 0..=19.
        assert_eq!(hit_test(&app, 20, 6), None);
        assert_eq!(hit_test(&app, 30, 6), None);
    }

    #[test]
    fn settings_keys_toggle_prefs_and_theme() {
        let mut app = app();
        app.page = Page::Settings;
        let before = app.board.settings.notifications.email_on_new_task;
        handle_settings_key(&mut app, KeyCode::Enter);
        assert_eq!(app.board.settings.notifications.email_on_new_task, !before);
        let theme = app.board.settings.theme;
        handle_settings_key(&mut app, KeyCode::Char('t'));
        assert_eq!(app.board.settings.theme, theme.toggled());
    }
}
