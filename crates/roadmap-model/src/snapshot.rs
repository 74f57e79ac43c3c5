//! Snapshot types
//!
//! Defines the persisted shape of the roadmap:
//! - `Group`: a labeled category lane on the timeline
//! - `Item`: a time-bounded, colored entry in a group's lane
//! - `Snapshot`: the full `{groups, items}` pair
//! - `ItemPatch`: per-field partial update applied by the client state layer
//! - `SnapshotPatch`: whole-collection replacement payload sent to the store
//!
//! The two patch types carry different semantics on purpose: an `ItemPatch`
//! merges field by field into one item, while a `SnapshotPatch` replaces a
//! collection wholesale and never merges individual items.

use crate::ids::{GroupId, ItemId};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A labeled category lane on the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier
    pub id: GroupId,
    /// Display label
    pub content: String,
}

impl Group {
    /// Create a group with a fresh id
    #[inline]
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            content: content.into(),
        }
    }
}

/// A single time-bounded entry placed in a group's lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub id: ItemId,
    /// Lane this item belongs to; existence of the group is not checked
    pub group: GroupId,
    /// Title text shown on the timeline
    pub content: String,
    /// Start date (inclusive)
    pub start: NaiveDate,
    /// End date
    pub end: NaiveDate,
    /// Free-text comment (rendered as a tooltip)
    #[serde(default)]
    pub title: String,
    /// Presentational color encoding
    #[serde(default)]
    pub style: String,
}

impl Item {
    /// Create an item with a fresh id
    #[inline]
    #[must_use]
    pub fn new(group: GroupId, content: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: ItemId::new(),
            group,
            content: content.into(),
            start,
            end,
            title: String::new(),
            style: String::new(),
        }
    }

    /// With comment text
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With style string
    #[inline]
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Merge a patch into this item. Only fields present in the patch are
    /// overwritten; omitted fields keep their previous value.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(group) = patch.group {
            self.group = group;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(style) = patch.style {
            self.style = style;
        }
    }
}

/// Per-field partial update for one item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    /// New lane
    pub group: Option<GroupId>,
    /// New title text
    pub content: Option<String>,
    /// New start date
    pub start: Option<NaiveDate>,
    /// New end date
    pub end: Option<NaiveDate>,
    /// New comment
    pub title: Option<String>,
    /// New style string
    pub style: Option<String>,
}

/// The complete persisted roadmap state at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Category lanes, in insertion order
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Timeline entries, in insertion order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Snapshot {
    /// Create a snapshot from explicit collections
    #[inline]
    #[must_use]
    pub fn new(groups: Vec<Group>, items: Vec<Item>) -> Self {
        Self { groups, items }
    }
}

/// Whole-collection replacement payload
///
/// Each present collection wholesale replaces the store's copy. Fields are
/// deserialized leniently: a value that is not a well-formed sequence of the
/// element type is treated as absent, leaving that collection untouched, and
/// the request still succeeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotPatch {
    /// Replacement groups, if well-formed
    #[serde(
        default,
        deserialize_with = "lenient_seq",
        skip_serializing_if = "Option::is_none"
    )]
    pub groups: Option<Vec<Group>>,
    /// Replacement items, if well-formed
    #[serde(
        default,
        deserialize_with = "lenient_seq",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<Vec<Item>>,
    /// Save sequence number; when present the store rejects the patch unless
    /// it is greater than the last applied sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
}

impl SnapshotPatch {
    /// Patch replacing both collections
    #[inline]
    #[must_use]
    pub fn full(groups: Vec<Group>, items: Vec<Item>) -> Self {
        Self {
            groups: Some(groups),
            items: Some(items),
            seq: None,
        }
    }

    /// With a save sequence number
    #[inline]
    #[must_use]
    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = Some(seq);
        self
    }
}

/// Accept the field when it parses as the expected sequence, drop it otherwise.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Minimal acknowledgment reply used by the HTTP surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkReply {
    /// Whether the request took effect
    pub ok: bool,
}
