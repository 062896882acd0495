//! Topic identifiers.

use sha2::{Digest, Sha256};

/// Derive a topic's id from its text.
///
/// The id is the lowercase SHA-256 hex digest of the text, so identical
/// submissions map to the same id and duplicates can be detected before
/// any network call.
pub fn topic_id(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
