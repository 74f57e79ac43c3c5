use proptest::prelude::*;
use roadmap_model::{Group, GroupId, Item, Snapshot, SnapshotPatch};
use roadmap_store::SnapshotStore;
use std::sync::Arc;

prop_compose! {
    fn arb_date()(days in 0i64..3650) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(days)
    }
}

prop_compose! {
    fn arb_group()(label in "[A-Za-z ]{1,16}") -> Group {
        Group::new(label)
    }
}

prop_compose! {
    fn arb_item()(
        content in "[A-Za-z ]{1,16}",
        start in arb_date(),
        span in 1i64..365,
        comment in "[a-z ]{0,12}",
        color in "#[0-9a-f]{6}",
    ) -> Item {
        Item::new(GroupId::new(), content, start, start + chrono::Duration::days(span))
            .with_title(comment)
            .with_style(format!("background-color:{color}; border-color:{color};"))
    }
}

proptest! {
    // Round-trip: replace(S) then read() returns S.
    #[test]
    fn replace_then_read_round_trips(
        groups in proptest::collection::vec(arb_group(), 0..5),
        items in proptest::collection::vec(arb_item(), 0..8),
    ) {
        let store = SnapshotStore::seeded();
        store.replace(SnapshotPatch::full(groups.clone(), items.clone()));
        prop_assert_eq!(store.read(), Snapshot::new(groups, items));
    }

    // Partial-field idempotence: replacing items alone never touches groups.
    #[test]
    fn items_only_patch_leaves_groups_unchanged(
        items in proptest::collection::vec(arb_item(), 0..8),
    ) {
        let store = SnapshotStore::seeded();
        let groups_before = store.read().groups;
        store.replace(SnapshotPatch {
            groups: None,
            items: Some(items.clone()),
            seq: None,
        });
        let after = store.read();
        prop_assert_eq!(after.groups, groups_before);
        prop_assert_eq!(after.items, items);
    }
}

#[test]
fn racing_plain_replaces_settle_on_one_writer() {
    let store = Arc::new(SnapshotStore::seeded());
    let written: Vec<Vec<Item>> = (0..8)
        .map(|n| {
            vec![Item::new(
                GroupId::new(),
                format!("writer {n}"),
                chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            )]
        })
        .collect();

    let handles: Vec<_> = written
        .iter()
        .cloned()
        .map(|items| {
            let store = store.clone();
            std::thread::spawn(move || {
                store.replace(SnapshotPatch {
                    groups: None,
                    items: Some(items),
                    seq: None,
                });
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Whatever interleaving happened, the store holds exactly one completed
    // write, never a blend.
    let settled = store.read().items;
    assert!(written.contains(&settled));
}
