//! Controller intent scenarios.
//!
//! These run against an unreachable store address: saves are
//! fire-and-forget and a failed save never affects local state, so every
//! assertion here is deterministic.

use pretty_assertions::assert_eq;
use roadmap_client::{ItemDraft, MutationController, SyncClient};
use roadmap_model::GroupId;
use roadmap_test_utils::date;

fn offline_controller() -> MutationController {
    MutationController::new(SyncClient::new("http://127.0.0.1:1/api"))
}

#[tokio::test]
async fn add_select_delete_scenario() {
    let mut controller = offline_controller();
    assert!(controller.state().items().is_empty());

    let draft = ItemDraft::new(GroupId::new())
        .with_content("Plan A")
        .with_dates(date(2025, 1, 1), date(2025, 6, 1))
        .with_color("#fff");
    let id = controller.add_item(&draft);

    assert_eq!(controller.state().items().len(), 1);
    assert_eq!(controller.state().selected(), Some(id));

    controller.delete_selected();

    assert!(controller.state().items().is_empty());
    assert_eq!(controller.state().selected(), None);
}

#[tokio::test]
async fn added_item_carries_draft_fields() {
    let mut controller = offline_controller();
    let group = GroupId::new();
    let draft = ItemDraft::new(group)
        .with_content("Plan A")
        .with_color("#a1b2c3")
        .with_comment("needs review");

    let id = controller.add_item(&draft);
    let item = controller.state().item(id).unwrap();

    assert_eq!(item.group, group);
    assert_eq!(item.content, "Plan A");
    assert_eq!(item.title, "needs review");
    assert_eq!(item.style, "background-color:#a1b2c3; border-color:#a1b2c3;");
    assert_eq!(item.start, date(2025, 1, 1));
    assert_eq!(item.end, date(2025, 6, 1));
}

#[tokio::test]
async fn update_selected_leaves_dates_alone() {
    let mut controller = offline_controller();
    let id = controller.add_item(&ItemDraft::new(GroupId::new()).with_content("Plan A"));

    // The edit form carries different dates, but the update path only
    // touches content, group, comment and style.
    let edited = ItemDraft::new(GroupId::new())
        .with_content("Plan B")
        .with_dates(date(2030, 1, 1), date(2030, 6, 1))
        .with_comment("rescoped");
    controller.update_selected(&edited);

    let item = controller.state().item(id).unwrap();
    assert_eq!(item.content, "Plan B");
    assert_eq!(item.group, edited.group);
    assert_eq!(item.title, "rescoped");
    assert_eq!(item.start, date(2025, 1, 1));
    assert_eq!(item.end, date(2025, 6, 1));
}

#[tokio::test]
async fn update_without_selection_is_a_no_op() {
    let mut controller = offline_controller();
    let id = controller.add_item(&ItemDraft::new(GroupId::new()).with_content("Plan A"));
    controller.set_selection(None);

    controller.update_selected(&ItemDraft::new(GroupId::new()).with_content("Plan B"));

    assert_eq!(controller.state().item(id).unwrap().content, "Plan A");
}

#[tokio::test]
async fn delete_without_selection_is_a_no_op() {
    let mut controller = offline_controller();
    controller.add_item(&ItemDraft::new(GroupId::new()));
    controller.set_selection(None);

    controller.delete_selected();

    assert_eq!(controller.state().items().len(), 1);
}

#[tokio::test]
async fn empty_group_name_is_rejected() {
    let mut controller = offline_controller();

    assert_eq!(controller.add_group(""), None);
    assert_eq!(controller.add_group("   "), None);
    assert!(controller.state().groups().is_empty());

    let id = controller.add_group("Commercial Storage").unwrap();
    assert_eq!(controller.state().group(id).unwrap().content, "Commercial Storage");
}

#[tokio::test]
async fn move_item_changes_dates_and_lane() {
    let mut controller = offline_controller();
    let id = controller.add_item(&ItemDraft::new(GroupId::new()));
    let new_lane = GroupId::new();

    controller.move_item(id, date(2025, 3, 1), date(2025, 9, 1), Some(new_lane));

    let item = controller.state().item(id).unwrap();
    assert_eq!(item.start, date(2025, 3, 1));
    assert_eq!(item.end, date(2025, 9, 1));
    assert_eq!(item.group, new_lane);
}

#[tokio::test]
async fn window_changes_are_view_only() {
    let mut controller = offline_controller();
    controller.set_window(date(2024, 6, 1), date(2025, 6, 1));

    assert_eq!(controller.state().window().start, date(2024, 6, 1));
    assert_eq!(controller.state().window().end, date(2025, 6, 1));
}
