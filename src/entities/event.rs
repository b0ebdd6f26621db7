use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::access::filter::ScopedEntity;
use crate::middleware::utils::db_utils::ViewFieldSelector;

pub const TABLE_NAME: &str = "event";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub league_id: Option<String>,
    pub school_id: Option<String>,
    pub team_id: Option<String>,
}

impl ViewFieldSelector for Event {
    fn get_select_query_fields() -> String {
        "record::id(id) AS id, title, starts_at, league_id, school_id, team_id".to_string()
    }
}

impl ScopedEntity for Event {
    fn league_id(&self) -> Option<&str> {
        self.league_id.as_deref()
    }

    fn school_id(&self) -> Option<&str> {
        self.school_id.as_deref()
    }

    fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct CreateEvent {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub league_id: Option<String>,
    pub school_id: Option<String>,
    pub team_id: Option<String>,
}

impl ScopedEntity for CreateEvent {
    fn league_id(&self) -> Option<&str> {
        self.league_id.as_deref()
    }

    fn school_id(&self) -> Option<&str> {
        self.school_id.as_deref()
    }

    fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }
}
