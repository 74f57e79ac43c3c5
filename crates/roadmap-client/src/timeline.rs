//! Local timeline state
//!
//! The client's mutable collections of groups and items, kept as the source
//! of truth for rendering and editing. Mutations are immediate, synchronous
//! and in-place, with no validation beyond items carrying an id (guaranteed
//! by the type). Updates merge field by field; replacement happens only on
//! the load path.

use chrono::NaiveDate;
use roadmap_model::{Group, GroupId, Item, ItemId, ItemPatch};

/// Visible date range of the rendering collaborator. A view concern only:
/// never persisted, never triggers a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// First visible date
    pub start: NaiveDate,
    /// Last visible date
    pub end: NaiveDate,
}

impl Default for DateWindow {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid calendar date"),
            end: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid calendar date"),
        }
    }
}

/// Authoritative local collections feeding the rendering collaborator
#[derive(Debug, Default)]
pub struct TimelineState {
    groups: Vec<Group>,
    items: Vec<Item>,
    selected: Option<ItemId>,
    window: DateWindow,
}

impl TimelineState {
    /// Empty state with the default window
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Category lanes, in insertion order
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Timeline entries, in insertion order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up one item
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Look up one group
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Currently selected item, if any
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Set or clear the selection (renderer select/deselect events)
    #[inline]
    pub fn set_selection(&mut self, selected: Option<ItemId>) {
        self.selected = selected;
    }

    /// Visible date range
    #[inline]
    #[must_use]
    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Move the visible date range
    #[inline]
    pub fn set_window(&mut self, start: NaiveDate, end: NaiveDate) {
        self.window = DateWindow { start, end };
    }

    /// Append a group
    pub fn add_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Relabel a group. Returns false when the id is unknown.
    pub fn rename_group(&mut self, id: GroupId, content: impl Into<String>) -> bool {
        match self.groups.iter_mut().find(|g| g.id == id) {
            Some(group) => {
                group.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Append an item
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Merge a patch into one item. Returns false when the id is unknown.
    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Remove an item, clearing the selection when it pointed at it.
    /// Returns false when the id is unknown.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() != before;
        if removed && self.selected == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Clear both collections and repopulate them wholesale (load path)
    pub fn replace_all(&mut self, groups: Vec<Group>, items: Vec<Item>) {
        self.groups = groups;
        self.items = items;
    }
}
