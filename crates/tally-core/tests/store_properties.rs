#![allow(missing_docs)]

use std::collections::HashSet;

use proptest::prelude::*;
use tally_core::{FilterMode, Task, TaskId, TaskListStore};
use time::OffsetDateTime;
use time::macros::datetime;

const AT: OffsetDateTime = datetime!(2024-05-01 09:00 UTC);

fn filter_mode_strategy() -> impl Strategy<Value = FilterMode> {
    prop_oneof![
        Just(FilterMode::All),
        Just(FilterMode::Active),
        Just(FilterMode::Completed),
    ]
}

fn non_blank_text() -> impl Strategy<Value = String> {
    "[ ]{0,2}[a-zA-Z0-9][a-zA-Z0-9 ]{0,12}"
}

fn blank_text() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

fn store_with(texts: &[String]) -> (TaskListStore, Vec<TaskId>) {
    let mut store = TaskListStore::new();
    let ids = texts
        .iter()
        .map(|text| {
            store
                .add_task_at(text, AT)
                .unwrap_or_else(|| panic!("{text:?} should be accepted"))
        })
        .collect();
    (store, ids)
}

fn ids_of(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(|task| task.id).collect()
}

fn find_id(store: &TaskListStore, text: &str) -> TaskId {
    store
        .tasks()
        .iter()
        .find(|task| task.text == text)
        .map(|task| task.id)
        .unwrap_or_else(|| panic!("no task named {text:?}"))
}

proptest! {
    #[test]
    fn adds_keep_count_and_order(texts in prop::collection::vec(non_blank_text(), 0..32)) {
        let (store, ids) = store_with(&texts);

        prop_assert_eq!(store.len(), texts.len());
        prop_assert_eq!(ids_of(store.tasks()), ids);
        let stored: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        let expected: Vec<&str> = texts.iter().map(|t| t.trim()).collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn blank_adds_never_change_the_count(
        texts in prop::collection::vec(non_blank_text(), 0..8),
        blanks in prop::collection::vec(blank_text(), 1..8),
    ) {
        let (mut store, _) = store_with(&texts);
        let before = store.tasks().to_vec();
        for blank in &blanks {
            prop_assert_eq!(store.add_task_at(blank, AT), None);
        }
        prop_assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn toggle_flips_only_the_target_and_is_an_involution(
        texts in prop::collection::vec(non_blank_text(), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let (mut store, ids) = store_with(&texts);
        let target = ids[pick.index(ids.len())];
        let before = store.tasks().to_vec();

        prop_assert!(store.toggle_completed(target));
        for (old, new) in before.iter().zip(store.tasks()) {
            prop_assert_eq!(old.id, new.id);
            if new.id == target {
                prop_assert_eq!(new.completed, !old.completed);
            } else {
                prop_assert_eq!(old, new);
            }
        }

        store.toggle_completed(target);
        prop_assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn delete_removes_exactly_one_existing_task(
        texts in prop::collection::vec(non_blank_text(), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let (mut store, ids) = store_with(&texts);
        let target = ids[pick.index(ids.len())];

        prop_assert!(store.delete_task(target));
        prop_assert_eq!(store.len(), ids.len() - 1);
        let expected: Vec<TaskId> = ids.iter().copied().filter(|id| *id != target).collect();
        prop_assert_eq!(ids_of(store.tasks()), expected);

        prop_assert!(!store.delete_task(target));
        prop_assert_eq!(store.len(), ids.len() - 1);
    }

    #[test]
    fn filtered_views_partition_the_list(
        flags in prop::collection::vec(any::<bool>(), 0..32),
        selected in filter_mode_strategy(),
    ) {
        let texts: Vec<String> = (0..flags.len()).map(|n| format!("task {n}")).collect();
        let (mut store, ids) = store_with(&texts);
        for (id, flag) in ids.iter().zip(&flags) {
            if *flag {
                store.toggle_completed(*id);
            }
        }
        store.set_filter(selected);
        let snapshot = store.tasks().to_vec();

        let all = store.view_for(FilterMode::All);
        let active = store.view_for(FilterMode::Active);
        let completed = store.view_for(FilterMode::Completed);

        prop_assert_eq!(all.as_slice(), store.tasks());
        prop_assert!(active.iter().all(|task| !task.completed));
        prop_assert!(completed.iter().all(|task| task.completed));

        let union: HashSet<TaskId> = active.iter().chain(&completed).map(|t| t.id).collect();
        let every: HashSet<TaskId> = all.iter().map(|t| t.id).collect();
        prop_assert_eq!(union, every);

        prop_assert_eq!(store.filtered_view(), store.view_for(selected));
        prop_assert_eq!(store.filtered_view(), store.filtered_view());
        prop_assert_eq!(store.tasks(), snapshot.as_slice());
        prop_assert_eq!(store.filter(), selected);
    }

    #[test]
    fn unknown_ids_are_ignored(texts in prop::collection::vec(non_blank_text(), 0..8)) {
        let (mut store, _) = store_with(&texts);
        let before = store.tasks().to_vec();
        let stranger = TaskId::new();

        prop_assert!(!store.toggle_completed(stranger));
        prop_assert!(!store.delete_task(stranger));
        prop_assert_eq!(store.tasks(), before.as_slice());
    }
}

#[test]
fn completing_one_task_hides_it_from_active() {
    let mut store = TaskListStore::new();
    store.add_task("Buy milk");
    store.add_task("Walk dog");
    store.toggle_completed(find_id(&store, "Walk dog"));
    store.set_filter(FilterMode::Active);

    let view = store.filtered_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].text, "Buy milk");
    assert!(!view[0].completed);
}

#[test]
fn deleting_the_only_task_empties_every_view() {
    let mut store = TaskListStore::new();
    store.add_task("A");
    store.delete_task(find_id(&store, "A"));

    for mode in FilterMode::ALL {
        store.set_filter(mode);
        assert!(store.filtered_view().is_empty(), "{mode} view should be empty");
    }
}

#[test]
fn empty_text_creates_nothing() {
    let mut store = TaskListStore::new();
    store.add_task("");
    assert_eq!(store.len(), 0);
}
