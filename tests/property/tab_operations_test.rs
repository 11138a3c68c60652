use proptest::prelude::*;

use searchpane::managers::tab_manager::{TabManager, TabManagerTrait};

#[derive(Debug, Clone)]
enum Op {
    Create,
    Close(usize),
    Switch(usize),
    MarkUnread(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Create),
        (0usize..8).prop_map(Op::Close),
        (0usize..8).prop_map(Op::Switch),
        (0usize..8).prop_map(Op::MarkUnread),
    ]
}

proptest! {
    #[test]
    fn tab_set_never_empty_and_active_exists(ops in prop::collection::vec(op(), 0..64)) {
        let mut manager = TabManager::new("https://www.google.com");
        for op in ops {
            let ids: Vec<_> = manager.get_all_tabs().iter().map(|t| t.id.clone()).collect();
            match op {
                Op::Create => {
                    let id = manager.create_tab(None);
                    prop_assert_eq!(manager.active_tab_id(), &id);
                }
                Op::Close(i) => {
                    let before = manager.tab_count();
                    manager.close_tab(&ids[i % ids.len()]).unwrap();
                    prop_assert!(manager.tab_count() == before - 1 || before == 1);
                }
                Op::Switch(i) => {
                    let id = &ids[i % ids.len()];
                    manager.switch_tab(id).unwrap();
                    prop_assert!(!manager.get_active_tab().unread);
                }
                Op::MarkUnread(i) => {
                    manager.mark_unread(&ids[i % ids.len()]).unwrap();
                }
            }

            prop_assert!(manager.tab_count() >= 1);
            let active = manager.active_tab_id().clone();
            prop_assert_eq!(
                manager.get_all_tabs().iter().filter(|t| t.id == active).count(),
                1
            );
            prop_assert!(!manager.get_active_tab().unread);
        }
    }
}
