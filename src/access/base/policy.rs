use tracing::{debug, warn};

use crate::access::base::role::Role;
use crate::access::base::scope::{
    build_scope, AccessScope, MembershipContext, ScopeOptions, ScopeSubject,
};
use crate::middleware::error::{AppError, AppResult};

/// Narrows a freshly built scope according to the subject's role.
///
/// Coaches lose league-wide visibility, viewer roles and unrecognized roles
/// are denied outright. Officials keep their scope here; assignment narrowing
/// is applied per query.
pub fn apply_role_policy(scope: AccessScope) -> AppResult<AccessScope> {
    let Some(role) = scope.known_role() else {
        warn!("->> access denied: unrecognized role '{}'", scope.role());
        return Err(AppError::AccessDenied);
    };

    if role.is_viewer() {
        warn!("->> access denied: viewer role '{role}'");
        return Err(AppError::AccessDenied);
    }

    match role {
        Role::Coach => {
            debug!("->> coach scope, dropping league ids");
            Ok(scope.without_leagues())
        }
        _ => Ok(scope),
    }
}

/// Builds the request scope, applies the role rules and only then checks
/// that something is left.
pub fn resolve_scope(
    subject: &ScopeSubject,
    membership: Option<&MembershipContext>,
) -> AppResult<AccessScope> {
    let scope = build_scope(subject, membership, ScopeOptions { allow_empty: true })?;
    let scope = apply_role_policy(scope)?;
    scope.ensure_not_empty()?;
    Ok(scope)
}
