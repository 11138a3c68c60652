use searchpane::managers::tab_manager::{CloseOutcome, TabManager, TabManagerTrait};
use searchpane::types::tab::{TabId, PLACEHOLDER_TITLE};

const HOME: &str = "https://www.google.com";

#[test]
fn test_new_manager_has_one_active_default_tab() {
    let mgr = TabManager::new(HOME);
    assert_eq!(mgr.tab_count(), 1);
    let active = mgr.get_active_tab();
    assert_eq!(active.url, HOME);
    assert_eq!(active.title, PLACEHOLDER_TITLE);
    assert!(!active.unread);
}

#[test]
fn test_create_tab_returns_unique_ids_and_activates() {
    let mut mgr = TabManager::new(HOME);
    let id1 = mgr.create_tab(None);
    let id2 = mgr.create_tab(Some("https://example.com"));
    assert_ne!(id1, id2);
    assert_eq!(mgr.tab_count(), 3);
    assert_eq!(mgr.active_tab_id(), &id2);
    assert_eq!(mgr.get_tab(&id1).unwrap().url, HOME);
    assert_eq!(mgr.get_tab(&id2).unwrap().url, "https://example.com");
}

#[test]
fn test_tabs_keep_insertion_order() {
    let mut mgr = TabManager::new(HOME);
    let first = mgr.active_tab_id().clone();
    let second = mgr.create_tab(None);
    let third = mgr.create_tab(None);
    let ids: Vec<&TabId> = mgr.get_all_tabs().iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec![&first, &second, &third]);
}

#[test]
fn test_close_active_tab_activates_previous_sibling() {
    let mut mgr = TabManager::new(HOME);
    let _first = mgr.active_tab_id().clone();
    let second = mgr.create_tab(None);
    let third = mgr.create_tab(None);

    let outcome = mgr.close_tab(&third).unwrap();
    assert_eq!(outcome, CloseOutcome::ActivatedSibling(second.clone()));
    assert_eq!(mgr.active_tab_id(), &second);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_close_active_middle_tab_activates_previous_sibling() {
    let mut mgr = TabManager::new(HOME);
    let first = mgr.active_tab_id().clone();
    let second = mgr.create_tab(None);
    let _third = mgr.create_tab(None);
    mgr.switch_tab(&second).unwrap();

    mgr.close_tab(&second).unwrap();
    assert_eq!(mgr.active_tab_id(), &first);
}

#[test]
fn test_close_active_first_tab_activates_next_sibling() {
    let mut mgr = TabManager::new(HOME);
    let first = mgr.active_tab_id().clone();
    let second = mgr.create_tab(None);
    let _third = mgr.create_tab(None);
    mgr.switch_tab(&first).unwrap();

    let outcome = mgr.close_tab(&first).unwrap();
    assert_eq!(outcome, CloseOutcome::ActivatedSibling(second.clone()));
    assert_eq!(mgr.active_tab_id(), &second);
}

#[test]
fn test_close_background_tab_keeps_active() {
    let mut mgr = TabManager::new(HOME);
    let first = mgr.active_tab_id().clone();
    let second = mgr.create_tab(None);

    let outcome = mgr.close_tab(&first).unwrap();
    assert_eq!(outcome, CloseOutcome::Unchanged);
    assert_eq!(mgr.active_tab_id(), &second);
    assert_eq!(mgr.tab_count(), 1);
}

#[test]
fn test_close_last_tab_creates_replacement() {
    let mut mgr = TabManager::new(HOME);
    let only = mgr.active_tab_id().clone();
    mgr.update_tab_url(&only, "https://example.com").unwrap();

    let outcome = mgr.close_tab(&only).unwrap();
    assert_eq!(mgr.tab_count(), 1);
    let active = mgr.get_active_tab();
    assert_ne!(active.id, only);
    assert_eq!(active.url, HOME);
    assert_eq!(outcome, CloseOutcome::Replaced(active.id.clone()));
}

#[test]
fn test_close_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::new(HOME);
    assert!(mgr.close_tab(&TabId::from("nonexistent")).is_err());
    assert_eq!(mgr.tab_count(), 1);
}

#[test]
fn test_switch_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::new(HOME);
    let active = mgr.active_tab_id().clone();
    assert!(mgr.switch_tab(&TabId::from("nonexistent")).is_err());
    assert_eq!(mgr.active_tab_id(), &active);
}

#[test]
fn test_mark_unread_only_affects_background_tabs() {
    let mut mgr = TabManager::new(HOME);
    let first = mgr.active_tab_id().clone();
    let second = mgr.create_tab(None);

    mgr.mark_unread(&second).unwrap();
    assert!(!mgr.get_tab(&second).unwrap().unread);

    mgr.mark_unread(&first).unwrap();
    assert!(mgr.get_tab(&first).unwrap().unread);

    mgr.switch_tab(&first).unwrap();
    assert!(!mgr.get_tab(&first).unwrap().unread);
}

#[test]
fn test_update_title_and_url() {
    let mut mgr = TabManager::new(HOME);
    let id = mgr.active_tab_id().clone();
    mgr.update_tab_title(&id, "Google").unwrap();
    mgr.update_tab_url(&id, "https://www.google.com/search?q=rust").unwrap();
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.title, "Google");
    assert_eq!(tab.url, "https://www.google.com/search?q=rust");

    assert!(mgr.update_tab_title(&TabId::from("missing"), "x").is_err());
}
