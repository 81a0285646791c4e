use crate::ContentHash;

pub trait ContentHashPort: Send + Sync {
    /// Content address of `text`, derived from its raw UTF-8 bytes.
    fn hash_text(&self, text: &str) -> ContentHash;
}
