//! Identifiers for roadmap entities
//!
//! The source of these ids used to be wall-clock milliseconds, which can
//! collide when two entities are created within the same millisecond. ULIDs
//! keep the ids collision-resistant and sortable by creation time.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique group identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub Ulid);

impl GroupId {
    /// Generate new group ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Ulid);

impl ItemId {
    /// Generate new item ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_generation() {
        let id1 = ItemId::new();
        let id2 = ItemId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn rapid_generation_stays_unique() {
        let ids: Vec<GroupId> = (0..1000).map(|_| GroupId::new()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn id_serializes_as_string() {
        let id = ItemId::new();
        let json = serde_json::to_value(id).unwrap();
        assert!(json.is_string());
        let back: ItemId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }
}
