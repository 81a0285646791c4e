use diesel::prelude::*;

use crate::db::schema::kv_namespace;

#[derive(Debug, Insertable)]
#[diesel(table_name = kv_namespace)]
pub struct NewKvNamespaceRow {
    pub name: String,
    pub created_at_ms: i64,
}
