use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Serialize, Deserialize, Eq, PartialEq, Hash, Clone, Copy, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    LeagueAdmin,
    SchoolAdmin,
    AthleticDirector,
    Coach,
    Official,
    Fan,
    Parent,
    Guest,
}

impl Role {
    /// Folds free-form role labels ("Athletic Director", "league-admin") to
    /// the snake_case form used on scopes and in the database.
    pub fn normalize(raw: &str) -> String {
        raw.trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect()
    }

    /// Parses a role label, `None` for anything unrecognized.
    pub fn parse(raw: &str) -> Option<Role> {
        Role::from_str(&Role::normalize(raw)).ok()
    }

    /// Roles that only ever consume public pages and never get a data scope.
    pub fn is_viewer(&self) -> bool {
        matches!(self, Role::Fan | Role::Parent | Role::Guest)
    }

    /// Roles allowed to create events and assignments inside their scope.
    pub fn can_manage_events(&self) -> bool {
        matches!(
            self,
            Role::LeagueAdmin | Role::SchoolAdmin | Role::AthleticDirector
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn parses_normalized_labels() {
        assert_eq!(Role::parse("league_admin"), Some(Role::LeagueAdmin));
        assert_eq!(Role::parse(" Athletic Director "), Some(Role::AthleticDirector));
        assert_eq!(Role::parse("School-Admin"), Some(Role::SchoolAdmin));
        assert_eq!(Role::parse("COACH"), Some(Role::Coach));
    }

    #[test]
    fn unknown_labels_do_not_parse() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn display_matches_stored_form() {
        assert_eq!(Role::AthleticDirector.to_string(), "athletic_director");
        assert_eq!(Role::Official.as_ref(), "official");
    }

    #[test]
    fn viewer_roles() {
        assert!(Role::Fan.is_viewer());
        assert!(Role::Parent.is_viewer());
        assert!(Role::Guest.is_viewer());
        assert!(!Role::Coach.is_viewer());
        assert!(!Role::Official.is_viewer());
    }
}
