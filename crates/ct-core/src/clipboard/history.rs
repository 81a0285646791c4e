use super::ClipRecord;

/// Orders records most recent first.
///
/// The sort is stable: records sharing a timestamp keep their scan order,
/// which itself is unspecified.
pub fn sort_newest_first(records: &mut [ClipRecord]) {
    records.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms));
}
