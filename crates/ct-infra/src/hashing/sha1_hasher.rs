use ct_core::ports::ContentHashPort;
use ct_core::ContentHash;
use sha1::{Digest, Sha1};

/// Content addresses as lowercase hex SHA-1 of the UTF-8 bytes.
pub struct Sha1ContentHasher;

impl ContentHashPort for Sha1ContentHasher {
    fn hash_text(&self, text: &str) -> ContentHash {
        let mut hasher = Sha1::new();
        hasher.update(text.as_bytes());
        ContentHash::new(hex::encode(hasher.finalize()))
    }
}
