use tracing::{info, warn};
use validator::Validate;

use crate::{
    access::{
        base::{role::Role, scope::AccessScope},
        filter::{entity_in_scope, entity_within_scope, ScopedEntity},
        query::apply_scope_to_query,
    },
    database::repositories::{
        assignment::{ASSIGNMENT_SCOPE_COLUMNS, OFFICIAL_ASSIGNMENT_SCOPE_COLUMNS},
        event::EVENT_SCOPE_COLUMNS,
    },
    entities::{
        assignment::{AssignOfficialInput, OfficialAssignment},
        event::{CreateEvent, Event},
    },
    interfaces::repositories::{
        assignment::AssignmentRepositoryInterface, event::EventRepositoryInterface,
        user::UserRepositoryInterface,
    },
    middleware::error::{AppError, AppResult},
};

pub struct EventService<'a, E, A, U>
where
    E: EventRepositoryInterface,
    A: AssignmentRepositoryInterface,
    U: UserRepositoryInterface,
{
    events_repository: &'a E,
    assignments_repository: &'a A,
    users_repository: &'a U,
}

fn ensure_in_scope<T: ScopedEntity>(scope: &AccessScope, entity: &T) -> AppResult<()> {
    if entity_in_scope(scope, entity) {
        Ok(())
    } else {
        Err(AppError::AccessDenied)
    }
}

fn ensure_writable<T: ScopedEntity>(scope: &AccessScope, entity: &T) -> AppResult<()> {
    if entity_within_scope(scope, entity) {
        Ok(())
    } else {
        warn!("->> access denied: write reaches outside scope of role '{}'", scope.role());
        Err(AppError::AccessDenied)
    }
}

fn ensure_manager(scope: &AccessScope) -> AppResult<()> {
    match scope.known_role() {
        Some(role) if role.can_manage_events() => Ok(()),
        _ => {
            warn!("->> access denied: role '{}' cannot manage events", scope.role());
            Err(AppError::AccessDenied)
        }
    }
}

impl<'a, E, A, U> EventService<'a, E, A, U>
where
    E: EventRepositoryInterface,
    A: AssignmentRepositoryInterface,
    U: UserRepositoryInterface,
{
    pub fn new(
        events_repository: &'a E,
        assignments_repository: &'a A,
        users_repository: &'a U,
    ) -> Self {
        Self {
            events_repository,
            assignments_repository,
            users_repository,
        }
    }

    pub async fn list_events(&self, scope: &AccessScope) -> AppResult<Vec<Event>> {
        let query = apply_scope_to_query(
            scope,
            self.events_repository.select_query(),
            &EVENT_SCOPE_COLUMNS,
        )?;
        self.events_repository.list(query).await
    }

    /// Not found for unknown ids, `AccessDenied` for events outside the scope.
    pub async fn get_event(&self, scope: &AccessScope, event_id: &str) -> AppResult<Event> {
        scope.ensure_not_empty()?;
        let event = self
            .events_repository
            .get_by_id(event_id)
            .await?
            .ok_or(AppError::EntityFailIdNotFound {
                ident: event_id.to_string(),
            })?;
        ensure_in_scope(scope, &event)?;
        Ok(event)
    }

    pub async fn create_event(&self, scope: &AccessScope, data: CreateEvent) -> AppResult<Event> {
        ensure_manager(scope)?;
        data.validate()?;
        ensure_writable(scope, &data)?;
        let event = self.events_repository.create(data).await?;
        info!("->> event created id={} by role={}", event.id, scope.role());
        Ok(event)
    }

    pub async fn assign_official(
        &self,
        scope: &AccessScope,
        event_id: &str,
        data: AssignOfficialInput,
    ) -> AppResult<OfficialAssignment> {
        ensure_manager(scope)?;
        data.validate()?;
        let event = self.get_event(scope, event_id).await?;

        let official = self
            .users_repository
            .get_by_id(&data.official_id)
            .await?
            .ok_or(AppError::EntityFailIdNotFound {
                ident: data.official_id.clone(),
            })?;
        if Role::parse(&official.role) != Some(Role::Official) {
            return Err(AppError::Validation {
                description: format!("User {} is not an official", official.id),
            });
        }

        let assignment = self.assignments_repository.create(&event, data).await?;
        info!(
            "->> official {} assigned to event {}",
            assignment.official_id, assignment.event_id
        );
        Ok(assignment)
    }

    pub async fn list_assignments(
        &self,
        scope: &AccessScope,
    ) -> AppResult<Vec<OfficialAssignment>> {
        let columns = match scope.known_role() {
            Some(Role::Official) => &OFFICIAL_ASSIGNMENT_SCOPE_COLUMNS,
            _ => &ASSIGNMENT_SCOPE_COLUMNS,
        };
        let query =
            apply_scope_to_query(scope, self.assignments_repository.select_query(), columns)?;
        self.assignments_repository.list(query).await
    }
}
