//! Core transaction store and id allocation
//!
//! The store is a plain ordered `Vec`. It is not synchronized; callers that
//! share it across requests wrap it in a lock (see `txweb_api::AppState`).

pub mod error;
pub mod models;

use txweb_config::IdAllocation;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails};
pub use models::{sample_transactions, Transaction};

// ==================== Id Allocation ====================

/// Derives the id for the next created transaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdAllocator {
    policy: IdAllocation,
}

impl IdAllocator {
    pub fn new(policy: IdAllocation) -> Self {
        Self { policy }
    }

    /// Next id for the given records, 1 when there are none.
    ///
    /// With `IdAllocation::Last` only the final record is consulted, so after
    /// deleting the tail an id can be handed out twice over the lifetime of
    /// the store (never while the earlier holder still exists).
    pub fn next_id(&self, records: &[Transaction]) -> i64 {
        match self.policy {
            IdAllocation::Last => records.last().map(|t| t.id + 1).unwrap_or(1),
            IdAllocation::Max => records.iter().map(|t| t.id).max().unwrap_or(0) + 1,
        }
    }
}

// ==================== Record Store ====================

/// In-memory ordered collection of transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    records: Vec<Transaction>,
    allocator: IdAllocator,
}

impl TransactionStore {
    /// Create an empty store
    pub fn new(allocator: IdAllocator) -> Self {
        Self {
            records: Vec::new(),
            allocator,
        }
    }

    /// Create a store holding the three sample transactions
    pub fn seeded(allocator: IdAllocator) -> Self {
        Self {
            records: sample_transactions(),
            allocator,
        }
    }

    /// All records in insertion order
    pub fn list_all(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given id
    pub fn find_by_id(&self, id: i64) -> Option<&Transaction> {
        self.records.iter().find(|t| t.id == id)
    }

    /// Like `find_by_id`, but absence is an error
    pub fn get(&self, id: i64) -> CoreResult<&Transaction> {
        self.find_by_id(id)
            .ok_or(CoreError::TransactionNotFound { id })
    }

    /// Id the next `create` will assign
    pub fn next_id(&self) -> i64 {
        self.allocator.next_id(&self.records)
    }

    /// Append a record as-is. The caller is responsible for id uniqueness.
    pub fn append(&mut self, record: Transaction) {
        self.records.push(record);
    }

    /// Allocate an id and append a new record
    pub fn create(&mut self, date: impl Into<String>, amount: f64) -> Transaction {
        let record = Transaction::new(self.next_id(), date, amount);
        self.append(record.clone());
        log::debug!("Created transaction {}", record.id);
        record
    }

    /// Replace date and amount of the first matching record.
    /// Returns `false` and changes nothing when the id is absent.
    pub fn update_by_id(&mut self, id: i64, date: impl Into<String>, amount: f64) -> bool {
        match self.records.iter_mut().find(|t| t.id == id) {
            Some(record) => {
                record.date = date.into();
                record.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Remove the first matching record.
    /// Returns `false` and changes nothing when the id is absent.
    pub fn delete_by_id(&mut self, id: i64) -> bool {
        match self.records.iter().position(|t| t.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> TransactionStore {
        TransactionStore::seeded(IdAllocator::default())
    }

    fn ids(store: &TransactionStore) -> Vec<i64> {
        store.list_all().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_seed_invariant() {
        let store = seeded();
        let records = store.list_all();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], Transaction::new(1, "2025-06-01", 100.0));
        assert_eq!(records[1], Transaction::new(2, "2025-06-02", -200.0));
        assert_eq!(records[2], Transaction::new(3, "2025-06-03", 300.0));
    }

    #[test]
    fn test_create_increments_id_and_appends() {
        let mut store = seeded();
        let created = store.create("2025-07-01", 42.5);
        assert_eq!(created.id, 4);
        assert_eq!(store.list_all().last(), Some(&created));
        assert_eq!(ids(&store), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let mut store = TransactionStore::new(IdAllocator::default());
        assert!(store.is_empty());
        assert_eq!(store.create("x", 1.0).id, 1);
    }

    #[test]
    fn test_update_mutates_in_place() {
        let mut store = seeded();
        assert!(store.update_by_id(2, "2030-01-01", 999.0));
        let records = store.list_all();
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].date, "2030-01-01");
        assert_eq!(records[1].amount, 999.0);
        assert_eq!(records[0], Transaction::new(1, "2025-06-01", 100.0));
        assert_eq!(records[2], Transaction::new(3, "2025-06-03", 300.0));
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = seeded();
        assert!(!store.update_by_id(999, "x", 1.0));
        assert_eq!(store.list_all(), seeded().list_all());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = seeded();
        assert!(store.delete_by_id(2));
        assert_eq!(ids(&store), vec![1, 3]);
        assert_eq!(store.list_all()[1].date, "2025-06-03");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = seeded();
        assert!(!store.delete_by_id(999));
        assert_eq!(store.list_all(), seeded().list_all());
    }

    #[test]
    fn test_round_trip() {
        let mut store = seeded();
        let created = store.create("someday", -12.25);
        let found = store.find_by_id(created.id).unwrap();
        assert_eq!(found.date, "someday");
        assert_eq!(found.amount, -12.25);
    }

    #[test]
    fn test_get_missing_is_error() {
        let store = seeded();
        assert_eq!(store.get(999), Err(CoreError::TransactionNotFound { id: 999 }));
        assert_eq!(store.get(1).map(|t| t.amount), Ok(100.0));
    }

    #[test]
    fn test_last_allocation_reuses_deleted_tail_id() {
        let mut store = seeded();
        store.delete_by_id(3);
        assert_eq!(store.create("x", 0.0).id, 3);
    }

    #[test]
    fn test_last_allocation_follows_tail_not_max() {
        let mut store = TransactionStore::new(IdAllocator::new(IdAllocation::Last));
        store.append(Transaction::new(5, "a", 1.0));
        store.append(Transaction::new(2, "b", 1.0));
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_max_allocation_uses_highest_id() {
        let mut store = TransactionStore::new(IdAllocator::new(IdAllocation::Max));
        store.append(Transaction::new(5, "a", 1.0));
        store.append(Transaction::new(2, "b", 1.0));
        assert_eq!(store.next_id(), 6);

        let mut store = TransactionStore::seeded(IdAllocator::new(IdAllocation::Max));
        store.delete_by_id(3);
        assert_eq!(store.create("x", 0.0).id, 3);
        store.delete_by_id(1);
        assert_eq!(store.create("y", 0.0).id, 4);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Transaction::new(2, "2025-06-02", -200.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 2, "date": "2025-06-02", "amount": -200.0 }));
    }
}
