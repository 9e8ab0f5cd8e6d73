//! HistoryStore append/clear/latest/find behaviour

use tally_core::{BigDecimal, Calculation, HistoryStore, Operation};

fn calc(a: i64, b: i64, op: Operation) -> Calculation {
    Calculation::new(BigDecimal::from(a), BigDecimal::from(b), op)
}

fn seeded_store() -> HistoryStore {
    let mut store = HistoryStore::new();
    store.append(calc(10, 5, Operation::Add));
    store.append(calc(20, 3, Operation::Subtract));
    store
}

#[test]
fn test_add_calculation() {
    let mut store = seeded_store();
    let latest = calc(2, 2, Operation::Add);
    store.append(latest.clone());

    assert_eq!(store.latest(), Some(&latest));
}

#[test]
fn test_get_history() {
    let store = seeded_store();
    assert_eq!(store.all().len(), 2);
}

#[test]
fn test_history_preserves_insertion_order() {
    let mut store = HistoryStore::new();
    let records: Vec<Calculation> = (0..5)
        .map(|i| calc(i, i + 1, Operation::ALL[(i % 4) as usize]))
        .collect();

    for record in &records {
        store.append(record.clone());
    }

    assert_eq!(store.all(), records.as_slice());
    assert_eq!(store.latest(), records.last());
}

#[test]
fn test_clear_history() {
    let mut store = seeded_store();
    store.clear();

    assert!(store.all().is_empty());
    assert!(store.latest().is_none());
}

#[test]
fn test_get_latest() {
    let store = seeded_store();
    let latest = store.latest().unwrap();

    assert_eq!(latest.operand1, BigDecimal::from(20));
    assert_eq!(latest.operand2, BigDecimal::from(3));
}

#[test]
fn test_find_by_operation() {
    let store = seeded_store();

    assert_eq!(store.find_by_operation_name("add").len(), 1);
    assert_eq!(store.find_by_operation_name("subtract").len(), 1);
    assert!(store.find_by_operation_name("divide").is_empty());
}

#[test]
fn test_find_by_operation_preserves_order() {
    let mut store = HistoryStore::new();
    store.append(calc(1, 1, Operation::Add));
    store.append(calc(2, 2, Operation::Multiply));
    store.append(calc(3, 3, Operation::Add));

    let adds = store.find_by_operation_name("add");
    let firsts: Vec<&BigDecimal> = adds.iter().map(|c| &c.operand1).collect();
    assert_eq!(firsts, vec![&BigDecimal::from(1), &BigDecimal::from(3)]);
}

#[test]
fn test_get_latest_with_empty_history() {
    let store = HistoryStore::new();
    assert!(store.latest().is_none());
}

#[test]
fn test_stores_are_isolated() {
    let mut first = HistoryStore::new();
    let second = HistoryStore::new();
    first.append(calc(1, 2, Operation::Add));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}
