mod clip_store;

pub use clip_store::{ClipStore, DieselClipRecordStore};
