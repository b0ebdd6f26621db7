use serde::{Deserialize, Serialize};

use crate::access::base::scope::MembershipContext;
use crate::access::filter::ScopedEntity;
use crate::middleware::utils::db_utils::ViewFieldSelector;

pub const TABLE_NAME: &str = "school";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct School {
    pub id: String,
    pub name: String,
    pub league_id: Option<String>,
}

impl ViewFieldSelector for School {
    fn get_select_query_fields() -> String {
        "record::id(id) AS id, name, league_id".to_string()
    }
}

impl ScopedEntity for School {
    fn league_id(&self) -> Option<&str> {
        self.league_id.as_deref()
    }

    fn school_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn team_id(&self) -> Option<&str> {
        None
    }
}

impl From<&School> for MembershipContext {
    fn from(school: &School) -> Self {
        MembershipContext {
            school_id: Some(school.id.clone()),
            league_id: school.league_id.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateSchool {
    pub id: Option<String>,
    pub name: String,
    pub league_id: Option<String>,
}
