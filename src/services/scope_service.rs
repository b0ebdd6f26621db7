use serde::Serialize;
use tracing::debug;

use crate::{
    access::base::{
        policy::resolve_scope,
        scope::{AccessScope, MembershipContext, ScopeSubject},
    },
    entities::user::LocalUser,
    interfaces::repositories::{school::SchoolRepositoryInterface, user::UserRepositoryInterface},
    middleware::{
        ctx::Ctx,
        error::{AppError, CtxResult},
    },
};

/// The logged in user together with the scope resolved for this request.
#[derive(Debug, Clone, Serialize)]
pub struct SessionScope {
    pub user: LocalUser,
    pub scope: AccessScope,
}

pub struct ScopeService<'a, U, S>
where
    U: UserRepositoryInterface,
    S: SchoolRepositoryInterface,
{
    users_repository: &'a U,
    schools_repository: &'a S,
    ctx: &'a Ctx,
}

impl<'a, U, S> ScopeService<'a, U, S>
where
    U: UserRepositoryInterface,
    S: SchoolRepositoryInterface,
{
    pub fn new(users_repository: &'a U, schools_repository: &'a S, ctx: &'a Ctx) -> Self {
        Self {
            users_repository,
            schools_repository,
            ctx,
        }
    }

    pub async fn current_user(&self) -> CtxResult<LocalUser> {
        let user_id = self.ctx.user_id()?;
        self.users_repository
            .get_by_id(&user_id)
            .await?
            .ok_or_else(|| self.ctx.to_ctx_error(AppError::AuthenticationFail))
    }

    /// The user's school and that school's league. A school id that no longer
    /// resolves still counts as school membership.
    pub async fn membership(&self, user: &LocalUser) -> CtxResult<Option<MembershipContext>> {
        let Some(school_id) = user.school_id.as_deref() else {
            return Ok(None);
        };
        let membership = match self.schools_repository.get_by_id(school_id).await? {
            Some(school) => MembershipContext::from(&school),
            None => MembershipContext {
                school_id: Some(school_id.to_string()),
                league_id: None,
            },
        };
        Ok(Some(membership))
    }

    pub async fn current_scope(&self) -> CtxResult<SessionScope> {
        let user = self.current_user().await?;
        let subject = ScopeSubject::from(&user);
        let membership = if subject.has_explicit_ids() {
            None
        } else {
            self.membership(&user).await?
        };
        let scope = resolve_scope(&subject, membership.as_ref())?;
        debug!(
            "->> scope user={} role={} leagues={:?} schools={:?} teams={:?}",
            user.id,
            scope.role(),
            scope.league_ids(),
            scope.school_ids(),
            scope.team_ids()
        );
        Ok(SessionScope { user, scope })
    }
}
