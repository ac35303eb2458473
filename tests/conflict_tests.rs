use rinterviews::core::conflict::{SlotClaim, collides, find_conflict, has_conflict};

mod common;
use common::{d, record, t};

#[test]
fn test_exact_slot_and_shared_person_collides() {
    let existing = vec![record("Alice", "Bob", "2025-03-01", "10:00", "10:10").with_id("a".into())];

    let same_candidate = record("Alice", "Carol", "2025-03-01", "10:00", "10:10");
    let same_interviewer = record("Dan", "Bob", "2025-03-01", "10:00", "10:10");
    assert!(has_conflict(&SlotClaim::from(&same_candidate), &existing));
    assert!(has_conflict(&SlotClaim::from(&same_interviewer), &existing));
}

#[test]
fn test_no_shared_person_no_conflict() {
    let existing = vec![record("Alice", "Bob", "2025-03-01", "10:00", "10:10").with_id("a".into())];
    let other = record("Carol", "Dan", "2025-03-01", "10:00", "10:10");
    assert!(!has_conflict(&SlotClaim::from(&other), &existing));
}

#[test]
fn test_names_compare_exactly() {
    let existing = vec![record("Alice", "Bob", "2025-03-01", "10:00", "10:10").with_id("a".into())];
    let other = record("alice", "bob", "2025-03-01", "10:00", "10:10");
    assert!(!has_conflict(&SlotClaim::from(&other), &existing));
}

#[test]
fn test_any_slot_difference_avoids_conflict() {
    let existing = vec![record("Alice", "Bob", "2025-03-01", "10:00", "10:10").with_id("a".into())];

    for (date, start, end) in [
        ("2025-03-01", "10:01", "10:11"),
        ("2025-03-01", "10:05", "10:15"),
        ("2025-03-01", "10:00", "10:11"),
        ("2025-03-02", "10:00", "10:10"),
    ] {
        let claim = record("Alice", "Bob", date, start, end);
        assert!(
            !has_conflict(&SlotClaim::from(&claim), &existing),
            "{date} {start}-{end} should not conflict"
        );
    }
}

#[test]
fn test_own_id_is_excluded() {
    let stored = record("Alice", "Bob", "2025-03-01", "10:00", "10:10").with_id("a".into());
    let existing = vec![stored.clone()];

    assert!(!collides(&SlotClaim::from(&stored), &existing[0]));

    let claim = SlotClaim {
        id: Some("b"),
        ..SlotClaim::from(&stored)
    };
    assert!(collides(&claim, &existing[0]));
}

#[test]
fn test_find_conflict_returns_first_match() {
    let existing = vec![
        record("Zed", "Yan", "2025-03-01", "10:00", "10:10").with_id("z".into()),
        record("Alice", "Bob", "2025-03-01", "10:00", "10:10").with_id("a".into()),
        record("Alice", "Eve", "2025-03-01", "10:00", "10:10").with_id("e".into()),
    ];
    let claim = SlotClaim {
        id: None,
        date: d("2025-03-01"),
        start: t("10:00"),
        end: t("10:10"),
        candidate: "Alice",
        interviewer: "Nobody",
    };

    let hit = find_conflict(&claim, &existing).expect("conflict");
    assert_eq!(hit.id, "a");
}

#[test]
fn test_empty_list_never_conflicts() {
    let claim = record("Alice", "Bob", "2025-03-01", "10:00", "10:10");
    assert!(!has_conflict(&SlotClaim::from(&claim), &[]));
}
