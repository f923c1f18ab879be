//! Sample board content for a fresh data file, so every page has something
//! to show on first launch. Mirrors the demo content of the web original.

use chrono::NaiveDate;

use crate::project::{Project, ProjectCategory};
use crate::settings::{Settings, UserProfile};
use crate::store::{Board, TaskStore};
use crate::task::{Assignee, Priority, Status, Task};
use crate::team::{Role, TeamMember};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn task(
    id: u32,
    title: &str,
    description: &str,
    project: &str,
    status: Status,
    priority: Priority,
    due: NaiveDate,
    category: &str,
    assignee: Option<&str>,
) -> Task {
    Task {
        id,
        title: title.into(),
        description: (!description.is_empty()).then(|| description.to_string()),
        project: project.into(),
        status,
        priority,
        due_date: due,
        category: category.into(),
        assignee: assignee.map(Assignee::named),
        created_at: date(2024, 2, 26),
    }
}

pub fn sample_board() -> Board {
    let tasks = vec![
        task(
            1,
            "Design new logo",
            "Create mockups for client review. Ensure all brand guidelines are met.",
            "Project Alpha",
            Status::InProgress,
            Priority::High,
            date(2024, 3, 15),
            "Design",
            Some("Alice Wonderland"),
        ),
        task(
            2,
            "Develop API endpoint for user authentication",
            "User authentication endpoint. Needs JWT implementation.",
            "Project Beta",
            Status::ToDo,
            Priority::High,
            date(2024, 3, 20),
            "Development",
            Some("Bob The Builder"),
        ),
        task(
            3,
            "Write documentation for API",
            "Document the new API. Include examples for each endpoint.",
            "Project Alpha",
            Status::ToDo,
            Priority::Medium,
            date(2024, 3, 25),
            "Documentation",
            Some("Charlie Brown"),
        ),
        task(
            4,
            "Test payment gateway integration",
            "Ensure all payment methods work. Test with sandbox accounts.",
            "Project Gamma",
            Status::Completed,
            Priority::High,
            date(2024, 3, 1),
            "QA",
            Some("Diana Prince"),
        ),
        task(
            5,
            "Deploy to staging environment",
            "Prepare for UAT. Coordinate with DevOps team.",
            "Project Beta",
            Status::InProgress,
            Priority::Medium,
            date(2024, 3, 18),
            "Deployment",
            Some("Edward Scissorhands"),
        ),
        task(
            6,
            "User feedback session planning",
            "Gather feedback on new UI. Prepare questions and invite users.",
            "Project Alpha",
            Status::ToDo,
            Priority::Low,
            date(2024, 4, 1),
            "UX Research",
            None,
        ),
    ];

    let projects = vec![
        Project {
            id: 1,
            name: "Project Alpha".into(),
            category: ProjectCategory::Work,
            member_ids: vec!["tm1".into()],
        },
        Project {
            id: 2,
            name: "Project Beta".into(),
            category: ProjectCategory::Work,
            member_ids: vec!["tm1".into(), "tm2".into()],
        },
        Project {
            id: 3,
            name: "Project Gamma".into(),
            category: ProjectCategory::Urgent,
            member_ids: vec!["tm4".into()],
        },
    ];

    let member = |id: &str, name: &str, email: &str, role: Role| TeamMember {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        avatar: None,
    };
    let team = vec![
        member("tm1", "Alice Wonderland", "alice@example.com", Role::Admin),
        member("tm2", "Bob The Builder", "bob@example.com", Role::Editor),
        member("tm3", "Charlie Brown", "charlie@example.com", Role::Viewer),
        member("tm4", "Diana Prince", "diana@example.com", Role::Editor),
    ];

    Board {
        store: TaskStore::from_tasks(tasks),
        projects,
        team,
        settings: Settings {
            profile: UserProfile {
                name: "Kemal Atmojo".into(),
                email: "kemal@example.com".into(),
                bio: "Software developer passionate about creating amazing web experiences.".into(),
                avatar: None,
            },
            ..Settings::default()
        },
    }
}
