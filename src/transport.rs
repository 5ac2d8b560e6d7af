//! Boundary types shared with the transport collaborator.
//!
//! Placing and deleting objects on the remote service is not this crate's
//! job; the network layer consumes the token from
//! [`encode`](crate::encode) and speaks its own protocol. These types pin
//! down the only shapes the two sides exchange: the opaque correlation key
//! a placement returns, the 2-integer chunk coordinate a deletion targets,
//! and the receipt pairing a key with its cooldown. No I/O happens here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier the remote service assigns to a placed object.
///
/// The contents carry no meaning to this crate; they are echoed back
/// verbatim when deleting.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Wraps a raw key string.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        ObjectKey(key.into())
    }

    /// Returns the raw key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectKey {
    fn from(key: &str) -> Self {
        ObjectKey(key.to_string())
    }
}

/// Coordinate of the chunk an object lives in.
///
/// Deletion requests address a chunk by the `"x,y"` form this type's
/// `Display` implementation produces.
///
/// # Examples
///
/// ```rust
/// use objtoken::ChunkCoord;
///
/// let chunk = ChunkCoord::new(-3, 12);
/// assert_eq!(chunk.to_string(), "-3,12");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
}

impl ChunkCoord {
    /// Creates a chunk coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        ChunkCoord { x, y }
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// What the transport collaborator returns for a successful placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReceipt {
    /// Correlation key for the placed object.
    pub key: ObjectKey,
    /// Cooldown before the next placement is accepted, in milliseconds.
    pub cooldown_ms: u64,
}
