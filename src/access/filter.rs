use crate::access::base::scope::AccessScope;
use crate::middleware::error::AppResult;

/// A record that can be placed inside a league, school or team.
pub trait ScopedEntity {
    fn league_id(&self) -> Option<&str>;
    fn school_id(&self) -> Option<&str>;
    fn team_id(&self) -> Option<&str>;
}

impl AccessScope {
    /// Team, then school, then league. A missing id on the entity skips that
    /// check, so an entity without ids is never in scope.
    pub fn contains<E: ScopedEntity + ?Sized>(&self, entity: &E) -> bool {
        entity
            .team_id()
            .is_some_and(|id| self.team_ids().contains(id))
            || entity
                .school_id()
                .is_some_and(|id| self.school_ids().contains(id))
            || entity
                .league_id()
                .is_some_and(|id| self.league_ids().contains(id))
    }
}

pub fn entity_in_scope<E: ScopedEntity + ?Sized>(scope: &AccessScope, entity: &E) -> bool {
    scope.contains(entity)
}

/// Write-side check: the entity carries at least one id and every id it
/// carries is in the matching scope set.
pub fn entity_within_scope<E: ScopedEntity + ?Sized>(scope: &AccessScope, entity: &E) -> bool {
    let ids = [
        (entity.team_id(), scope.team_ids()),
        (entity.school_id(), scope.school_ids()),
        (entity.league_id(), scope.league_ids()),
    ];
    ids.iter().any(|(id, _)| id.is_some())
        && ids
            .iter()
            .all(|(id, set)| id.map_or(true, |id| set.contains(id)))
}

/// Keeps the entities visible to `scope`, in their original order.
pub fn filter_entities_by_scope<E: ScopedEntity>(
    scope: &AccessScope,
    entities: Vec<E>,
) -> AppResult<Vec<E>> {
    scope.ensure_not_empty()?;
    Ok(entities
        .into_iter()
        .filter(|e| scope.contains(e))
        .collect())
}
