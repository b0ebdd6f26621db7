use serde::{Deserialize, Serialize};

use crate::access::base::scope::ScopeSubject;
use crate::middleware::utils::db_utils::ViewFieldSelector;

pub const TABLE_NAME: &str = "local_user";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalUser {
    pub id: String,
    pub username: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_ids: Option<Vec<String>>,
}

impl ViewFieldSelector for LocalUser {
    fn get_select_query_fields() -> String {
        "record::id(id) AS id, username, role, school_id, league_ids, school_ids, team_ids"
            .to_string()
    }
}

impl From<&LocalUser> for ScopeSubject {
    fn from(user: &LocalUser) -> Self {
        ScopeSubject {
            id: Some(user.id.clone()),
            role: user.role.clone(),
            league_ids: user.league_ids.clone(),
            school_ids: user.school_ids.clone(),
            team_ids: user.team_ids.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub role: String,
    pub school_id: Option<String>,
    pub league_ids: Option<Vec<String>>,
    pub school_ids: Option<Vec<String>>,
    pub team_ids: Option<Vec<String>>,
}

impl CreateUser {
    pub fn new(username: &str, password: &str, role: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
            school_id: None,
            league_ids: None,
            school_ids: None,
            team_ids: None,
        }
    }
}
