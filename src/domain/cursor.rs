//! Pagination cursor
//!
//! Opaque token handed to clients as `nextCursor`. It carries the
//! last-evaluated index key as hex-encoded JSON.

use super::{DomainError, StartKey};

pub struct Cursor;

impl Cursor {
    /// Encode a resume position as an opaque token
    pub fn encode(key: &StartKey) -> String {
        // Serializing a struct of strings and a UUID cannot fail
        let json = serde_json::to_vec(key).unwrap_or_default();
        hex::encode(json)
    }

    /// Decode a token produced by [`Cursor::encode`].
    ///
    /// # Errors
    /// `DomainError::InvalidCursor` for anything that is not a well-formed
    /// token.
    pub fn decode(token: &str) -> Result<StartKey, DomainError> {
        let bytes = hex::decode(token).map_err(|_| DomainError::InvalidCursor)?;
        let key: StartKey =
            serde_json::from_slice(&bytes).map_err(|_| DomainError::InvalidCursor)?;

        if key.user_id.is_empty() || key.created_at.is_empty() {
            return Err(DomainError::InvalidCursor);
        }

        Ok(key)
    }
}
