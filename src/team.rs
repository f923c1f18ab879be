//! Team roster: members, roles and the permission set each role grants.
//! Enforcement is a backend concern; this page displays and edits the
//! assignments.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permission {
    ManageTeam,
    CreateProjects,
    EditAllProjects,
    DeleteAnyProject,
    ViewAllContent,
    EditAssignedProjects,
    AssignUsersToOwnProjects,
    CreateTasksInAssignedProjects,
    EditTasksInAssignedProjects,
    DeleteTasksInAssignedProjects,
    ViewAssignedContentOnly,
}

impl Permission {
    pub fn description(self) -> &'static str {
        match self {
            Permission::ManageTeam => "Manage team members (invite, assign roles, remove)",
            Permission::CreateProjects => "Create new projects",
            Permission::EditAllProjects => "Edit all project details & assign users",
            Permission::DeleteAnyProject => "Delete any project",
            Permission::ViewAllContent => "View all projects & tasks",
            Permission::EditAssignedProjects => "Edit details of assigned projects",
            Permission::AssignUsersToOwnProjects => "Assign users to own/managed projects",
            Permission::CreateTasksInAssignedProjects => "Create tasks in assigned projects",
            Permission::EditTasksInAssignedProjects => "Edit any task in assigned projects",
            Permission::DeleteTasksInAssignedProjects => "Delete any task in assigned projects",
            Permission::ViewAssignedContentOnly => "View only assigned projects & tasks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::Viewer];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::Admin => "Full access to all features and settings.",
            Role::Editor => {
                "Can manage assigned projects and create/edit content within them."
            }
            Role::Viewer => "Can only view assigned projects and tasks. Cannot make changes.",
        }
    }

    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Role::Admin => &[
                Permission::ManageTeam,
                Permission::CreateProjects,
                Permission::EditAllProjects,
                Permission::DeleteAnyProject,
                Permission::ViewAllContent,
            ],
            Role::Editor => &[
                Permission::ViewAssignedContentOnly,
                Permission::EditAssignedProjects,
                Permission::AssignUsersToOwnProjects,
                Permission::CreateTasksInAssignedProjects,
                Permission::EditTasksInAssignedProjects,
                Permission::DeleteTasksInAssignedProjects,
            ],
            Role::Viewer => &[Permission::ViewAssignedContentOnly],
        }
    }

    /// Next role in the Admin → Editor → Viewer cycle, for the role editor.
    pub fn cycled(self) -> Role {
        match self {
            Role::Admin => Role::Editor,
            Role::Editor => Role::Viewer,
            Role::Viewer => Role::Admin,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Add a member with a generated `tmN` id, defaulting to Viewer.
pub fn add_member(team: &mut Vec<TeamMember>, name: &str, email: &str) -> Option<String> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return None;
    }
    let next = team
        .iter()
        .filter_map(|m| m.id.strip_prefix("tm").and_then(|n| n.parse::<u32>().ok()))
        .max()
        .map_or(1, |m| m + 1);
    let id = format!("tm{next}");
    team.push(TeamMember {
        id: id.clone(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Viewer,
        avatar: None,
    });
    Some(id)
}

pub fn remove_member(team: &mut Vec<TeamMember>, id: &str) -> bool {
    let before = team.len();
    team.retain(|m| m.id != id);
    team.len() != before
}

pub fn set_role(team: &mut [TeamMember], id: &str, role: Role) -> bool {
    match team.iter_mut().find(|m| m.id == id) {
        Some(member) => {
            member.role = role;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn admin_holds_the_management_permissions() {
        assert!(Role::Admin.permissions().contains(&Permission::ManageTeam));
        assert!(Role::Admin.permissions().contains(&Permission::DeleteAnyProject));
        assert!(!Role::Viewer.permissions().contains(&Permission::ManageTeam));
        assert_eq!(Role::Viewer.permissions(), &[Permission::ViewAssignedContentOnly]);
    }

    #[test]
    fn new_members_start_as_viewers_with_sequential_ids() {
        let mut team = Vec::new();
        let a = add_member(&mut team, "Alice Wonderland", "alice@example.com").unwrap();
        let b = add_member(&mut team, "Bob The Builder", "bob@example.com").unwrap();
        assert_eq!(a, "tm1");
        assert_eq!(b, "tm2");
        assert_eq!(team[0].role, Role::Viewer);
        assert_eq!(add_member(&mut team, "", "x@example.com"), None);
    }

    #[test]
    fn role_changes_and_removal_target_by_id() {
        let mut team = Vec::new();
        let a = add_member(&mut team, "Alice Wonderland", "alice@example.com").unwrap();
        add_member(&mut team, "Bob The Builder", "bob@example.com").unwrap();
        assert!(set_role(&mut team, &a, Role::Admin));
        assert_eq!(team[0].role, Role::Admin);
        assert!(!set_role(&mut team, "tm99", Role::Editor));
        assert!(remove_member(&mut team, "tm2"));
        assert_eq!(team.len(), 1);
        assert!(!remove_member(&mut team, "tm2"));
    }

    #[test]
    fn role_cycle_visits_every_role() {
        assert_eq!(Role::Admin.cycled(), Role::Editor);
        assert_eq!(Role::Editor.cycled(), Role::Viewer);
        assert_eq!(Role::Viewer.cycled(), Role::Admin);
    }
}
