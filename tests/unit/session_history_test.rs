use searchpane::surface::history::SessionHistory;

fn history_of(urls: &[&str]) -> SessionHistory {
    let mut h = SessionHistory::new();
    for url in urls {
        h.commit(url);
    }
    h
}

#[test]
fn test_empty_history_has_no_capabilities() {
    let mut h = SessionHistory::new();
    assert!(h.is_empty());
    assert!(!h.can_go_back());
    assert!(!h.can_go_forward());
    assert_eq!(h.current(), None);
    assert_eq!(h.back(), None);
    assert_eq!(h.forward(), None);
}

#[test]
fn test_commits_append_and_move_cursor() {
    let h = history_of(&["https://a.com", "https://b.com", "https://c.com"]);
    assert_eq!(h.len(), 3);
    assert_eq!(h.current(), Some("https://c.com"));
    assert!(h.can_go_back());
    assert!(!h.can_go_forward());
}

#[test]
fn test_commit_of_current_address_is_a_reload() {
    let h = history_of(&["https://a.com", "https://a.com"]);
    assert_eq!(h.len(), 1);
    assert!(!h.can_go_back());
}

#[test]
fn test_back_then_forward() {
    let mut h = history_of(&["https://a.com", "https://b.com"]);
    assert_eq!(h.back(), Some("https://a.com"));
    h.commit("https://a.com");
    assert!(h.can_go_forward());
    assert_eq!(h.forward(), Some("https://b.com"));
    h.commit("https://b.com");
    assert_eq!(h.len(), 2);
    assert_eq!(h.current(), Some("https://b.com"));
}

#[test]
fn test_new_commit_after_back_drops_forward_entries() {
    let mut h = history_of(&["https://a.com", "https://b.com", "https://c.com"]);
    h.back();
    h.commit("https://b.com");
    h.commit("https://d.com");
    assert_eq!(h.len(), 3);
    assert_eq!(h.current(), Some("https://d.com"));
    assert!(!h.can_go_forward());
    assert_eq!(h.back(), Some("https://b.com"));
}

#[test]
fn test_redirect_after_traversal_replaces_entry() {
    let mut h = history_of(&["http://a.com", "https://b.com"]);
    h.back();
    h.commit("https://a.com/");
    assert_eq!(h.len(), 2);
    assert_eq!(h.current(), Some("https://a.com/"));
    assert!(h.can_go_forward());
}

#[test]
fn test_fresh_load_during_traversal_cuts_forward_entries() {
    let mut h = history_of(&["https://a.com", "https://b.com"]);
    h.back();
    h.cancel_traversal();
    h.commit("https://c.com");
    assert_eq!(h.len(), 2);
    assert_eq!(h.current(), Some("https://c.com"));
    assert!(!h.can_go_forward());
    assert_eq!(h.back(), Some("https://a.com"));
}
