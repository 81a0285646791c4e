use diesel::prelude::*;

use crate::db::schema::kv_entry;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = kv_entry)]
pub struct KvEntryRow {
    pub namespace: String,
    pub entry_key: String,
    pub value: Vec<u8>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = kv_entry)]
pub struct NewKvEntryRow {
    pub namespace: String,
    pub entry_key: String,
    pub value: Vec<u8>,
}
