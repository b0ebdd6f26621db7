use tracing::warn;

use crate::access::base::policy::resolve_scope;
use crate::access::base::scope::{AccessScope, MembershipContext, ScopeSubject};
use crate::database::query_builder::SurrealQueryBuilder;
use crate::middleware::error::{AppError, AppResult};

/// Scope columns present on the queried table, `None` when the table lacks one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeColumns {
    pub league: Option<&'static str>,
    pub school: Option<&'static str>,
    pub team: Option<&'static str>,
    pub official: Option<&'static str>,
}

fn scope_var(column: &str) -> String {
    format!("scope_{column}")
}

/// Constrains `query` to the scope. Every existing column with ids in the
/// scope contributes an `IN` alternative (a row matching any of them is in
/// scope, as with [`AccessScope::contains`]), and the official column is
/// pinned to the subject. Refuses to hand back a query nothing constrains.
pub fn apply_scope_to_query(
    scope: &AccessScope,
    query: SurrealQueryBuilder,
    columns: &ScopeColumns,
) -> AppResult<SurrealQueryBuilder> {
    scope.ensure_not_empty()?;

    let mut query = query;
    let mut alternatives = vec![];
    let id_sets = [
        (columns.league, scope.league_ids()),
        (columns.school, scope.school_ids()),
        (columns.team, scope.team_ids()),
    ];
    for (column, ids) in id_sets {
        let Some(column) = column else { continue };
        if ids.is_empty() {
            continue;
        }
        let var = scope_var(column);
        alternatives.push(format!("{column} IN ${var}"));
        query = query.bind_ids(var, ids.iter().cloned());
    }

    let mut added = alternatives.len();
    query = query.where_any(alternatives);

    if let (Some(column), Some(subject_id)) = (columns.official, scope.subject_id()) {
        query = query.where_eq(column, &scope_var(column), subject_id);
        added += 1;
    }

    if added == 0 {
        warn!(
            "->> access denied: no scope column matched for role={} query={}",
            scope.role(),
            query.sql
        );
        return Err(AppError::AccessDenied);
    }
    Ok(query)
}

pub fn scope_query(
    subject: &ScopeSubject,
    membership: Option<&MembershipContext>,
    query: SurrealQueryBuilder,
    columns: &ScopeColumns,
) -> AppResult<SurrealQueryBuilder> {
    let scope = resolve_scope(subject, membership)?;
    apply_scope_to_query(&scope, query, columns)
}
