use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

use crate::access::base::role::Role;
use crate::middleware::error::{AppError, AppResult};

/// League, school and team identifiers a subject may see during one request.
///
/// Built fresh per request by [`build_scope`] and never mutated afterwards;
/// role rules produce a new value instead of editing this one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessScope {
    subject_id: Option<String>,
    role: String,
    league_ids: BTreeSet<String>,
    school_ids: BTreeSet<String>,
    team_ids: BTreeSet<String>,
}

impl AccessScope {
    pub fn new<L, S, T>(
        subject_id: Option<String>,
        role: &str,
        league_ids: L,
        school_ids: S,
        team_ids: T,
    ) -> Self
    where
        L: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
        T: IntoIterator<Item = String>,
    {
        Self {
            subject_id,
            role: Role::normalize(role),
            league_ids: league_ids.into_iter().collect(),
            school_ids: school_ids.into_iter().collect(),
            team_ids: team_ids.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn subject_id(&self) -> Option<&str> {
        self.subject_id.as_deref()
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn known_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    #[must_use]
    pub fn league_ids(&self) -> &BTreeSet<String> {
        &self.league_ids
    }

    #[must_use]
    pub fn school_ids(&self) -> &BTreeSet<String> {
        &self.school_ids
    }

    #[must_use]
    pub fn team_ids(&self) -> &BTreeSet<String> {
        &self.team_ids
    }

    /// True when no league, school or team id is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.league_ids.is_empty() && self.school_ids.is_empty() && self.team_ids.is_empty()
    }

    /// Fails closed on an empty scope. No role is exempt.
    pub fn ensure_not_empty(&self) -> AppResult<()> {
        if self.is_empty() {
            warn!(
                "->> access denied: empty scope for role={} subject={:?}",
                self.role, self.subject_id
            );
            return Err(AppError::AccessDenied);
        }
        Ok(())
    }

    pub(crate) fn without_leagues(self) -> Self {
        Self {
            league_ids: BTreeSet::new(),
            ..self
        }
    }
}

/// The session-derived user as seen by the scope builder.
///
/// `league_ids`, `school_ids` and `team_ids` are the explicit accessible id
/// arrays; when none of them is set the scope comes from the membership.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScopeSubject {
    pub id: Option<String>,
    pub role: String,
    pub league_ids: Option<Vec<String>>,
    pub school_ids: Option<Vec<String>>,
    pub team_ids: Option<Vec<String>>,
}

impl ScopeSubject {
    pub fn has_explicit_ids(&self) -> bool {
        self.league_ids.is_some() || self.school_ids.is_some() || self.team_ids.is_some()
    }
}

/// A subject's school and the league that school belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipContext {
    pub school_id: Option<String>,
    pub league_id: Option<String>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScopeOptions {
    /// Let an all-empty scope through so role rules can run first.
    pub allow_empty: bool,
}

fn id_set(ids: Option<&Vec<String>>) -> BTreeSet<String> {
    ids.map(|v| v.iter().cloned().collect()).unwrap_or_default()
}

pub fn build_scope(
    subject: &ScopeSubject,
    membership: Option<&MembershipContext>,
    options: ScopeOptions,
) -> AppResult<AccessScope> {
    let (league_ids, school_ids) = if subject.has_explicit_ids() {
        (
            id_set(subject.league_ids.as_ref()),
            id_set(subject.school_ids.as_ref()),
        )
    } else {
        let school_ids = membership
            .and_then(|m| m.school_id.clone())
            .into_iter()
            .collect::<BTreeSet<_>>();
        let league_ids = membership
            .and_then(|m| m.league_id.clone())
            .into_iter()
            .collect::<BTreeSet<_>>();
        (league_ids, school_ids)
    };

    let scope = AccessScope {
        subject_id: subject.id.clone(),
        role: Role::normalize(&subject.role),
        league_ids,
        school_ids,
        team_ids: id_set(subject.team_ids.as_ref()),
    };

    if !options.allow_empty {
        scope.ensure_not_empty()?;
    }
    Ok(scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Option<Vec<String>> {
        Some(v.iter().map(|s| s.to_string()).collect())
    }

    fn set(v: &[&str]) -> BTreeSet<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn explicit_ids_are_used_and_deduplicated() {
        let subject = ScopeSubject {
            id: Some("u1".to_string()),
            role: "league_admin".to_string(),
            league_ids: ids(&["L1", "L1", "L2"]),
            school_ids: None,
            team_ids: None,
        };
        let membership = MembershipContext {
            school_id: Some("S9".to_string()),
            league_id: Some("L9".to_string()),
        };
        let scope = build_scope(&subject, Some(&membership), ScopeOptions::default()).unwrap();
        assert_eq!(scope.league_ids(), &set(&["L1", "L2"]));
        assert!(scope.school_ids().is_empty());
        assert!(scope.team_ids().is_empty());
        assert_eq!(scope.subject_id(), Some("u1"));
    }

    #[test]
    fn membership_fills_school_and_league() {
        let subject = ScopeSubject {
            role: "School Admin".to_string(),
            ..Default::default()
        };
        let membership = MembershipContext {
            school_id: Some("S1".to_string()),
            league_id: Some("L1".to_string()),
        };
        let scope = build_scope(&subject, Some(&membership), ScopeOptions::default()).unwrap();
        assert_eq!(scope.school_ids(), &set(&["S1"]));
        assert_eq!(scope.league_ids(), &set(&["L1"]));
        assert!(scope.team_ids().is_empty());
        assert_eq!(scope.role(), "school_admin");
    }

    #[test]
    fn school_without_league_gives_school_only() {
        let subject = ScopeSubject {
            role: "coach".to_string(),
            ..Default::default()
        };
        let membership = MembershipContext {
            school_id: Some("S1".to_string()),
            league_id: None,
        };
        let scope = build_scope(&subject, Some(&membership), ScopeOptions::default()).unwrap();
        assert_eq!(scope.school_ids(), &set(&["S1"]));
        assert!(scope.league_ids().is_empty());
    }

    #[test]
    fn empty_scope_is_denied() {
        let subject = ScopeSubject {
            role: "league_admin".to_string(),
            ..Default::default()
        };
        let err = build_scope(&subject, None, ScopeOptions::default()).unwrap_err();
        assert_eq!(err, AppError::AccessDenied);

        let subject = ScopeSubject {
            role: "league_admin".to_string(),
            league_ids: Some(vec![]),
            ..Default::default()
        };
        let membership = MembershipContext {
            school_id: Some("S1".to_string()),
            league_id: None,
        };
        // explicit but empty arrays win over membership
        let err = build_scope(&subject, Some(&membership), ScopeOptions::default()).unwrap_err();
        assert_eq!(err, AppError::AccessDenied);
    }

    #[test]
    fn allow_empty_lets_empty_scope_through() {
        let subject = ScopeSubject {
            role: "official".to_string(),
            ..Default::default()
        };
        let scope = build_scope(&subject, None, ScopeOptions { allow_empty: true }).unwrap();
        assert!(scope.is_empty());
        assert_eq!(scope.ensure_not_empty(), Err(AppError::AccessDenied));
    }

    #[test]
    fn building_twice_yields_same_sets() {
        let subject = ScopeSubject {
            id: Some("u1".to_string()),
            role: "coach".to_string(),
            league_ids: None,
            school_ids: ids(&["S2", "S1"]),
            team_ids: ids(&["T1"]),
        };
        let a = build_scope(&subject, None, ScopeOptions::default()).unwrap();
        let b = build_scope(&subject, None, ScopeOptions::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.school_ids(), &set(&["S1", "S2"]));
    }
}
