//! Mutation controller
//!
//! Translates discrete user intents from the UI collaborator into timeline
//! state changes followed by an unconditional save. There is no
//! dirty-checking or change coalescing; every intent ends with a full-state
//! push.
//!
//! Selection is a two-state machine: `none` or `selected(id)`. It is set by
//! an external select event or by `add_item`, and cleared by
//! `delete_selected` or an external deselect.

use crate::sync::SyncClient;
use crate::timeline::TimelineState;
use chrono::NaiveDate;
use roadmap_model::{Group, GroupId, Item, ItemId, ItemPatch};

/// Form fields for creating or editing an item, as the UI collaborator
/// delivers them
#[derive(Debug, Clone)]
pub struct ItemDraft {
    /// Title text
    pub content: String,
    /// Target lane
    pub group: GroupId,
    /// Start date
    pub start: NaiveDate,
    /// End date
    pub end: NaiveDate,
    /// Fill color, e.g. `#7dd3fc`
    pub color: String,
    /// Free-text comment
    pub comment: String,
}

impl ItemDraft {
    /// Draft with the form's default values
    #[must_use]
    pub fn new(group: GroupId) -> Self {
        Self {
            content: "New item".to_string(),
            group,
            start: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid calendar date"),
            end: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid calendar date"),
            color: "#7dd3fc".to_string(),
            comment: String::new(),
        }
    }

    /// With title text
    #[inline]
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// With date range
    #[inline]
    #[must_use]
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// With fill color
    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// With comment
    #[inline]
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    fn style(&self) -> String {
        format!(
            "background-color:{color}; border-color:{color};",
            color = self.color
        )
    }
}

/// Turns user intents into state changes followed by a save
#[derive(Debug)]
pub struct MutationController {
    state: TimelineState,
    sync: SyncClient,
}

impl MutationController {
    /// Controller over an empty timeline
    #[must_use]
    pub fn new(sync: SyncClient) -> Self {
        Self {
            state: TimelineState::new(),
            sync,
        }
    }

    /// Read access for the rendering collaborator
    #[inline]
    #[must_use]
    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    /// Fetch the store snapshot and repopulate the local state wholesale.
    ///
    /// On any transport failure the local state is left unchanged and the
    /// failure is logged, not surfaced to the user.
    pub async fn load_all(&mut self) {
        match self.sync.fetch().await {
            Ok(snapshot) => {
                self.state.replace_all(snapshot.groups, snapshot.items);
                tracing::info!(
                    groups = self.state.groups().len(),
                    items = self.state.items().len(),
                    "loaded snapshot"
                );
            }
            Err(err) => {
                tracing::warn!("load failed: {err}");
            }
        }
    }

    /// Create an item from the draft, select it, save
    pub fn add_item(&mut self, draft: &ItemDraft) -> ItemId {
        let item = Item::new(draft.group, draft.content.clone(), draft.start, draft.end)
            .with_title(draft.comment.clone())
            .with_style(draft.style());
        let id = item.id;
        self.state.add_item(item);
        self.state.set_selection(Some(id));
        self.save();
        id
    }

    /// Partially update the selected item from the draft, save.
    ///
    /// No-op when nothing is selected. Dates are deliberately not part of
    /// this path; after creation they change only through `move_item`.
    pub fn update_selected(&mut self, draft: &ItemDraft) {
        let Some(id) = self.state.selected() else {
            return;
        };
        self.state.update_item(
            id,
            ItemPatch {
                group: Some(draft.group),
                content: Some(draft.content.clone()),
                title: Some(draft.comment.clone()),
                style: Some(draft.style()),
                ..ItemPatch::default()
            },
        );
        self.save();
    }

    /// Remove the selected item, clear the selection, save.
    /// No-op when nothing is selected.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.state.selected() else {
            return;
        };
        self.state.remove_item(id);
        self.state.set_selection(None);
        self.save();
    }

    /// Add a category lane, save. No-op for an empty or cancelled name.
    pub fn add_group(&mut self, name: &str) -> Option<GroupId> {
        if name.trim().is_empty() {
            return None;
        }
        let group = Group::new(name);
        let id = group.id;
        self.state.add_group(group);
        self.save();
        Some(id)
    }

    /// Apply a drag of an item to new dates (and possibly a new lane), save.
    /// This is the one flow that changes dates after creation.
    pub fn move_item(
        &mut self,
        id: ItemId,
        start: NaiveDate,
        end: NaiveDate,
        group: Option<GroupId>,
    ) {
        self.state.update_item(
            id,
            ItemPatch {
                group,
                start: Some(start),
                end: Some(end),
                ..ItemPatch::default()
            },
        );
        self.save();
    }

    /// Relay a renderer select/deselect event; no save
    #[inline]
    pub fn set_selection(&mut self, selected: Option<ItemId>) {
        self.state.set_selection(selected);
    }

    /// Adjust the visible date range; a view concern, no save
    #[inline]
    pub fn set_window(&mut self, start: NaiveDate, end: NaiveDate) {
        self.state.set_window(start, end);
    }

    fn save(&self) {
        self.sync
            .push_detached(self.state.groups().to_vec(), self.state.items().to_vec());
    }
}
