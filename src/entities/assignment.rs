use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::access::filter::ScopedEntity;
use crate::middleware::utils::db_utils::ViewFieldSelector;

pub const TABLE_NAME: &str = "official_assignment";

/// An official assigned to work an event. League and school are copied from
/// the event so the assignment can be scoped without a join.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfficialAssignment {
    pub id: String,
    pub event_id: String,
    pub official_id: String,
    pub position: String,
    pub league_id: Option<String>,
    pub school_id: Option<String>,
}

impl ViewFieldSelector for OfficialAssignment {
    fn get_select_query_fields() -> String {
        "record::id(id) AS id, event_id, official_id, position, league_id, school_id".to_string()
    }
}

impl ScopedEntity for OfficialAssignment {
    fn league_id(&self) -> Option<&str> {
        self.league_id.as_deref()
    }

    fn school_id(&self) -> Option<&str> {
        self.school_id.as_deref()
    }

    fn team_id(&self) -> Option<&str> {
        None
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct AssignOfficialInput {
    #[validate(length(min = 1, message = "official_id is required"))]
    pub official_id: String,
    #[validate(length(min = 1, max = 50, message = "Position must be 1-50 characters"))]
    pub position: String,
}
