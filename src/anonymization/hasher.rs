//! Identifier digest
//!
//! Identifiers are replaced by the SHA-256 digest of their UTF-8 bytes,
//! rendered as lowercase hex. There is no salt and no key: the same
//! identifier always maps to the same token, in every run.

use sha2::{Digest, Sha256};

/// Length of a rendered digest in hex characters
pub const DIGEST_HEX_LEN: usize = 64;

/// Replaces an identifier with its SHA-256 hex digest
///
/// # Examples
///
/// ```
/// use cloak::anonymization::hasher::anonymize_value;
///
/// let token = anonymize_value("alice");
/// assert_eq!(token.len(), 64);
/// assert_eq!(token, anonymize_value("alice"));
/// ```
pub fn anonymize_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

/// Returns true if `value` has the shape of a digest produced by [`anonymize_value`]
///
/// Used only to warn about input that appears to be anonymized already;
/// such values are still hashed again.
pub fn looks_like_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
        && value
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
