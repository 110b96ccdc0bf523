use store::{GestureTable, RECENT_LIMIT, UserId};

fn insert(table: &mut GestureTable, user: &str, n: u64) {
    table.insert(
        UserId::new(user),
        "click".to_string(),
        format!("clicked_at_{n},0"),
        1_000 + n,
    );
}

#[test]
fn test_insert_assigns_increasing_ids() {
    let mut table = GestureTable::new();
    assert!(table.is_empty());
    let first = table.insert(UserId::new("a"), "scroll".into(), "scrolled_up".into(), 5);
    let second = table.insert(UserId::new("a"), "scroll".into(), "scrolled_down".into(), 6);
    assert!(second.id > first.id);
    assert_eq!(first.timestamp, 5);
    assert_eq!(first.user_id, UserId::new("a"));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_recent_is_newest_first_and_limited() {
    let mut table = GestureTable::new();
    for n in 0..15 {
        insert(&mut table, "alice", n);
    }
    let recent = table.recent(&UserId::new("alice"), RECENT_LIMIT);
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].action, "clicked_at_14,0");
    assert_eq!(recent[9].action, "clicked_at_5,0");
    assert!(recent.windows(2).all(|pair| pair[0].id > pair[1].id));
}

#[test]
fn test_recent_only_returns_own_events() {
    let mut table = GestureTable::new();
    insert(&mut table, "alice", 1);
    insert(&mut table, "bob", 2);
    insert(&mut table, "alice", 3);

    let alice = table.recent(&UserId::new("alice"), RECENT_LIMIT);
    assert_eq!(alice.len(), 2);
    assert!(alice.iter().all(|e| e.user_id == UserId::new("alice")));

    assert!(table.recent(&UserId::new("carol"), RECENT_LIMIT).is_empty());
}

#[test]
fn test_event_display() {
    let mut table = GestureTable::new();
    // 1970-01-01T10:20:30Z
    let event = table.insert(
        UserId::new("alice"),
        "mode_switch".into(),
        "switched_to_scroll_mode".into(),
        (10 * 3600 + 20 * 60 + 30) * 1000,
    );
    assert_eq!(
        event.to_string(),
        "mode_switch → switched_to_scroll_mode at 10:20:30"
    );
}

#[test]
fn test_event_serializes() {
    let mut table = GestureTable::new();
    let event = table.insert(UserId::new("alice"), "click".into(), "clicked_at_1,2".into(), 42);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["user_id"], "alice");
    assert_eq!(json["gesture"], "click");
    assert_eq!(json["timestamp"], 42);
}
