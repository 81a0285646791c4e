pub mod kv_entry;
pub mod kv_namespace;

pub use kv_entry::{KvEntryRow, NewKvEntryRow};
pub use kv_namespace::NewKvNamespaceRow;
