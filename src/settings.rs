//! User-facing settings: profile, notification preferences and theme.
//! Persisted in the board file alongside tasks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: "New User".into(),
            email: String::new(),
            bio: String::new(),
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email_on_new_task: bool,
    pub email_on_mention: bool,
    pub in_app_project_updates: bool,
    pub weekly_summary_email: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        NotificationPrefs {
            email_on_new_task: true,
            email_on_mention: true,
            in_app_project_updates: true,
            weekly_summary_email: false,
        }
    }
}

impl NotificationPrefs {
    /// (label, enabled) pairs in display order for the settings page.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            ("Email on new task", self.email_on_new_task),
            ("Email on mention", self.email_on_mention),
            ("In-app project updates", self.in_app_project_updates),
            ("Weekly summary email", self.weekly_summary_email),
        ]
    }

    pub fn toggle(&mut self, index: usize) {
        match index {
            0 => self.email_on_new_task = !self.email_on_new_task,
            1 => self.email_on_mention = !self.email_on_mention,
            2 => self.in_app_project_updates = !self.in_app_project_updates,
            3 => self.weekly_summary_email = !self.weekly_summary_email,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub notifications: NotificationPrefs,
    #[serde(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn notification_toggle_flips_only_the_indexed_pref() {
        let mut prefs = NotificationPrefs::default();
        prefs.toggle(3);
        assert!(prefs.weekly_summary_email);
        assert!(prefs.email_on_new_task);
        prefs.toggle(0);
        assert!(!prefs.email_on_new_task);
        // Out-of-range index is ignored.
        prefs.toggle(9);
        assert_eq!(
            prefs.entries().map(|(_, v)| v),
            [false, true, true, true]
        );
    }

    #[test]
    fn theme_round_trips_as_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
