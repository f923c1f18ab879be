use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs},
    Frame,
};

use crate::app::{App, ColumnArea, Page, TaskView};
use crate::calendar;
use crate::dashboard;
use crate::filter;
use crate::kanban::{self, COLUMNS};
use crate::project;
use crate::task::{Priority, Task};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);
    match app.page {
        Page::Dashboard => draw_dashboard(f, app, chunks[1]),
        Page::Tasks => draw_tasks(f, app, chunks[1]),
        Page::Calendar => draw_calendar(f, app, chunks[1]),
        Page::Projects => draw_projects(f, app, chunks[1]),
        Page::Team => draw_team(f, app, chunks[1]),
        Page::Settings => draw_settings(f, app, chunks[1]),
    }
    draw_status_line(f, app, chunks[2]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Page::ALL.iter().map(|p| Line::from(p.title())).collect();
    let selected = Page::ALL.iter().position(|&p| p == app.page).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().title("MonTask").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status_line {
        Some(message) => message.clone(),
        None => match app.page {
            Page::Tasks => {
                "a add  v view  / search  p/s/r/d filters  c clear  Enter move  q quit".into()
            }
            Page::Calendar => "v monthly/weekly  Tab next page  q quit".into(),
            Page::Projects => "a add project  u assign member  q quit".into(),
            Page::Team => "a add  r role  x remove  q quit".into(),
            Page::Settings => "Enter toggle  t theme  q quit".into(),
            Page::Dashboard => "Tab next page  1-6 jump  q quit".into(),
        },
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

fn draw_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let today = app.today();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let summary = dashboard::summary(app.board.store.tasks());
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(rows[0]);
    summary_card(f, cards[0], "Completed", summary.completed, Color::Green);
    summary_card(f, cards[1], "In Progress", summary.in_progress, Color::Blue);
    summary_card(f, cards[2], "Overdue", summary.overdue, Color::Red);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    task_list(
        f,
        halves[0],
        "Today's Tasks",
        &dashboard::due_today(app.board.store.tasks(), today),
    );
    task_list(
        f,
        halves[1],
        "Upcoming Tasks",
        &dashboard::upcoming(app.board.store.tasks(), today),
    );
}

fn summary_card(f: &mut Frame, area: Rect, title: &str, count: usize, color: Color) {
    let card = Paragraph::new(Line::from(Span::styled(
        count.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(card, area);
}

fn task_list(f: &mut Frame, area: Rect, title: &str, tasks: &[&Task]) {
    let items: Vec<ListItem> = tasks
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("[#{}] ", t.id)),
                Span::styled(t.title.clone(), Style::default().fg(Color::White)),
                Span::raw(format!(" (Due: {})", t.due_date)),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

// ---------------------------------------------------------------------------
// Tasks: filter summary + list or kanban
// ---------------------------------------------------------------------------

fn draw_tasks(f: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    draw_filter_bar(f, app, rows[0]);
    match app.task_view {
        TaskView::List => draw_task_table(f, app, rows[1]),
        TaskView::Kanban => draw_kanban(f, app, rows[1]),
    }
}

fn draw_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let c = &app.criteria;
    let field = |label: &str, value: String, active: bool| {
        let style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!("{label}: {value}  "), style)
    };
    let line = Line::from(vec![
        field(
            "Project",
            c.project.clone().unwrap_or_else(|| "All".into()),
            c.project.is_some(),
        ),
        field(
            "Status",
            c.status.map_or("All".into(), |s| s.to_string()),
            c.status.is_some(),
        ),
        field(
            "Priority",
            c.priority.map_or("All".into(), |p| p.to_string()),
            c.priority.is_some(),
        ),
        field(
            "Due",
            c.due_date.map_or("Any".into(), |d| d.to_string()),
            c.due_date.is_some(),
        ),
        field(
            "Search",
            if c.search.is_empty() {
                "-".into()
            } else {
                format!("\"{}\"", c.search)
            },
            !c.search.is_empty(),
        ),
    ]);
    let bar = Paragraph::new(line).block(Block::default().title("Filters").borders(Borders::ALL));
    f.render_widget(bar, area);
}

fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::Red),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Green),
    }
}

fn draw_task_table(f: &mut Frame, app: &App, area: Rect) {
    let filtered = filter::apply(app.board.store.tasks(), &app.criteria);
    if filtered.is_empty() {
        let empty = Paragraph::new(
            "No tasks match the current filters or search. Try adjusting your criteria or adding new tasks!",
        )
        .block(Block::default().title("Tasks").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = filtered
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.title.clone()),
                Cell::from(t.due_date.to_string()),
                Cell::from(Span::styled(t.priority.as_str(), priority_style(t.priority))),
                Cell::from(
                    t.assignee
                        .as_ref()
                        .map_or("N/A".to_string(), |a| a.name.clone()),
                ),
                Cell::from(t.status.as_str()),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Percentage(20),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Name", "Due Date", "Priority", "Assigned To", "Status"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title("Tasks").borders(Borders::ALL));
    f.render_widget(table, area);
}

/// One bordered `List` per configured column, teacher-board style. Records
/// each column's screen region and card order for mouse hit-testing.
fn draw_kanban(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let filtered = filter::apply(app.board.store.tasks(), &app.criteria);
    let buckets = kanban::partition(&filtered, &COLUMNS);
    let dragging = app.drag.active_task();

    let mut areas = Vec::with_capacity(COLUMNS.len());
    for (i, (&status, bucket)) in COLUMNS.iter().zip(&buckets).enumerate() {
        let items: Vec<ListItem> = bucket
            .iter()
            .enumerate()
            .map(|(row, t)| {
                let selected = app.selected_column == i && app.selected_task == row;
                let mut style = Style::default().fg(Color::White);
                if Some(t.id) == dragging {
                    style = style.fg(Color::Magenta).add_modifier(Modifier::ITALIC);
                } else if selected {
                    style = style.add_modifier(Modifier::BOLD);
                }
                let marker = if Some(t.id) == dragging {
                    "◆ "
                } else if selected {
                    "> "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::raw(format!("[#{}] ", t.id)),
                    Span::styled(t.title.clone(), style),
                    Span::raw(format!(" (Due: {})", t.due_date)),
                ]))
            })
            .collect();

        let count = bucket.len();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("{status} ({count})"))
                    .borders(Borders::ALL)
                    .border_style(if app.selected_column == i {
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default()
                    }),
            )
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(list, chunks[i]);

        areas.push(ColumnArea {
            area: chunks[i],
            status,
            task_ids: bucket.iter().map(|t| t.id).collect(),
        });
    }
    app.column_areas = areas;
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let today = app.today();
    let tasks = calendar::tasks_for_view(app.board.store.tasks(), app.calendar_mode, today);
    let title = match app.calendar_mode {
        calendar::CalendarMode::Monthly => format!("Calendar — {}", today.format("%B %Y")),
        calendar::CalendarMode::Weekly => {
            let (start, end) = calendar::week_bounds(today);
            format!("Calendar — week of {start} to {end}")
        }
    };
    let items: Vec<ListItem> = tasks
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", t.due_date),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(t.title.clone(), Style::default().fg(Color::White)),
                Span::raw(format!("  [{}] {}", t.status, t.category)),
            ]))
        })
        .collect();
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

fn draw_projects(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .board
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let progress = project::progress(app.board.store.tasks(), &p.name);
            let selected = i == app.project_cursor;
            let marker = if selected { "> " } else { "  " };
            let name_style = if selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(p.name.clone(), name_style),
                Span::styled(
                    format!("  [{}]", p.category.as_str()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!(
                    "  {}/{} done ({}%)  members: {}",
                    progress.completed,
                    progress.total,
                    progress.percent(),
                    p.member_ids.len()
                )),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title("Project Boards")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

fn draw_team(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Length(9)])
        .split(area);

    let items: Vec<ListItem> = app
        .board
        .team
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let selected = i == app.team_cursor;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{} <{}>", m.name, m.email), style),
                Span::styled(
                    format!("  {}", m.role),
                    Style::default().fg(Color::Magenta),
                ),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title("Team Members")
            .borders(Borders::ALL),
    );
    f.render_widget(list, halves[0]);

    // Permission panel for the selected member's role.
    let mut lines = Vec::new();
    if let Some(member) = app.board.team.get(app.team_cursor) {
        lines.push(Line::from(Span::styled(
            format!("{}: {}", member.role, member.role.description()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for permission in member.role.permissions() {
            lines.push(Line::from(format!("  - {}", permission.description())));
        }
    }
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Role Permissions")
            .borders(Borders::ALL),
    );
    f.render_widget(panel, halves[1]);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

fn draw_settings(f: &mut Frame, app: &App, area: Rect) {
    let settings = &app.board.settings;
    let mut lines = vec![
        Line::from(Span::styled(
            "Profile",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("  Name:  {}", settings.profile.name)),
        Line::from(format!("  Email: {}", settings.profile.email)),
        Line::from(format!("  Bio:   {}", settings.profile.bio)),
        Line::from(""),
        Line::from(Span::styled(
            "Notifications",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for (i, (label, enabled)) in settings.notifications.entries().iter().enumerate() {
        let box_mark = if *enabled { "[x]" } else { "[ ]" };
        let marker = if i == app.settings_cursor { "> " } else { "  " };
        let style = if i == app.settings_cursor {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{box_mark} {label}"),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Theme: {} (press t to toggle)",
        settings.theme.as_str()
    )));

    let page = Paragraph::new(lines).block(
        Block::default()
            .title("Settings & Profile")
            .borders(Borders::ALL),
    );
    f.render_widget(page, area);
}
