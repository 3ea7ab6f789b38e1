use studybuddy::store::TaskLedger;

#[test]
fn test_ids_start_at_one_and_increase() {
    let mut ledger = TaskLedger::new();
    assert_eq!(ledger.add("a", None), 1);
    assert_eq!(ledger.add("b", Some("25 Jan".to_string())), 2);
    assert_eq!(ledger.add("c", None), 3);
    let texts: Vec<&str> = ledger.list().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn test_ids_never_reused_after_deleting_highest() {
    let mut ledger = TaskLedger::new();
    ledger.add("a", None);
    let last = ledger.add("b", None);
    assert!(ledger.delete(last));
    let next = ledger.add("c", None);
    assert_eq!(next, 3);
    assert!(ledger.get(last).is_none());
}

#[test]
fn test_delete_missing_returns_false() {
    let mut ledger = TaskLedger::new();
    assert!(!ledger.delete(1));
    ledger.add("a", None);
    assert!(ledger.delete(1));
    assert!(!ledger.delete(1));
    assert!(ledger.is_empty());
}

#[test]
fn test_ids_unique_after_mixed_operations() {
    let mut ledger = TaskLedger::new();
    let mut issued = Vec::new();
    for round in 0..5 {
        issued.push(ledger.add(&format!("task {}", round), None));
        issued.push(ledger.add(&format!("extra {}", round), None));
        ledger.delete(issued[issued.len() - 1]);
    }
    let mut sorted = issued.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), issued.len(), "no id issued twice");

    let mut remaining: Vec<u32> = ledger.list().iter().map(|t| t.id).collect();
    let count = remaining.len();
    remaining.dedup();
    assert_eq!(remaining.len(), count);
    assert_eq!(ledger.len(), 5);
}

#[test]
fn test_text_is_trimmed() {
    let mut ledger = TaskLedger::new();
    let id = ledger.add("  read notes  ", None);
    assert_eq!(ledger.get(id).unwrap().text, "read notes");
}
