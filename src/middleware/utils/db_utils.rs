use uuid::Uuid;

/// Projection used when reading a table, so the record key comes back as a
/// plain string `id`.
pub trait ViewFieldSelector {
    fn get_select_query_fields() -> String;
}

pub fn new_record_key() -> String {
    Uuid::new_v4().simple().to_string()
}
