use serde_json::Value;
use std::collections::BTreeMap;
use surrealdb::engine::any::Any;
use surrealdb::method::Query;

use crate::database::client::Db;

/// `SELECT ... FROM ...` plus `AND`-joined conditions and bound variables.
#[derive(Debug, Clone)]
pub struct SurrealQueryBuilder {
    pub sql: String,
    pub conditions: Vec<String>,
    pub tail: Option<String>,
    pub variables: BTreeMap<String, Value>,
}

impl SurrealQueryBuilder {
    pub fn new(initial_sql: impl Into<String>) -> Self {
        Self {
            sql: initial_sql.into(),
            conditions: vec![],
            tail: None,
            variables: BTreeMap::new(),
        }
    }

    pub fn where_clause(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Several alternatives as a single parenthesized `OR` condition.
    pub fn where_any(mut self, alternatives: Vec<String>) -> Self {
        let clause = if alternatives.len() > 1 {
            format!("({})", alternatives.join(" OR "))
        } else {
            alternatives.join("")
        };
        if !clause.is_empty() {
            self.conditions.push(clause);
        }
        self
    }

    pub fn where_eq(self, column: &str, var: &str, value: impl Into<Value>) -> Self {
        self.where_clause(format!("{column} = ${var}"))
            .bind_var(var, value)
    }

    /// ORDER BY / LIMIT and anything else that goes after the conditions.
    pub fn tail(mut self, sql: impl Into<String>) -> Self {
        self.tail = Some(sql.into());
        self
    }

    pub fn bind_ids<I>(self, key: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let ids = ids.into_iter().map(Value::String).collect::<Vec<_>>();
        self.bind_var(key, Value::Array(ids))
    }

    pub fn bind_var(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn build(&self) -> String {
        let mut sql = self.sql.trim_end().to_string();
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        if let Some(tail) = &self.tail {
            sql.push(' ');
            sql.push_str(tail);
        }
        sql.push(';');
        sql
    }

    pub fn into_db_query(self, db: &Db) -> Query<'_, Any> {
        let sql = self.build();
        db.query(sql).bind(self.variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_plain_select() {
        let qb = SurrealQueryBuilder::new("SELECT * FROM event");
        assert_eq!(qb.build(), "SELECT * FROM event;");
        assert!(qb.conditions.is_empty());
    }

    #[test]
    fn joins_conditions_with_and_and_keeps_tail_last() {
        let qb = SurrealQueryBuilder::new("SELECT * FROM event")
            .where_any(vec!["school_id IN $schools".to_string()])
            .bind_ids("schools", vec!["S1".to_string()])
            .where_eq("official_id", "me", "o1")
            .tail("ORDER BY starts_at ASC");
        assert_eq!(
            qb.build(),
            "SELECT * FROM event WHERE school_id IN $schools AND official_id = $me ORDER BY starts_at ASC;"
        );
        assert_eq!(qb.variables.get("schools"), Some(&json!(["S1"])));
        assert_eq!(qb.variables.get("me"), Some(&json!("o1")));
    }

    #[test]
    fn alternatives_are_grouped() {
        let qb = SurrealQueryBuilder::new("SELECT * FROM event")
            .where_any(vec!["a IN $a".to_string(), "b IN $b".to_string()])
            .where_eq("c", "c", "x");
        assert_eq!(
            qb.build(),
            "SELECT * FROM event WHERE (a IN $a OR b IN $b) AND c = $c;"
        );

        let single = SurrealQueryBuilder::new("SELECT * FROM event")
            .where_any(vec!["a IN $a".to_string()]);
        assert_eq!(single.build(), "SELECT * FROM event WHERE a IN $a;");

        let none = SurrealQueryBuilder::new("SELECT * FROM event").where_any(vec![]);
        assert!(none.conditions.is_empty());
    }
}
