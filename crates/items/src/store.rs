use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use crate::error::StoreError;
use crate::types::{Item, ItemId, ItemStatus, NewItem, UserId};

/// Lookup capability the matcher reads item snapshots through.
///
/// Implementations return owned snapshots; callers never hold a lock across
/// scoring. All listing methods return items in ascending id order so that
/// ranking ties resolve deterministically.
pub trait ItemStore: Send + Sync {
    /// Fetch a single item by id.
    fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError>;
    /// All items reported by `user`, regardless of status.
    fn find_by_reporter(&self, user: UserId) -> Result<Vec<Item>, StoreError>;
    /// All items currently in `status`.
    fn find_by_status(&self, status: ItemStatus) -> Result<Vec<Item>, StoreError>;
    /// Every stored item.
    fn all(&self) -> Result<Vec<Item>, StoreError>;
    /// Store a new report, assigning its id.
    fn insert(&self, item: NewItem) -> Result<Item, StoreError>;
    /// Insert or replace an item under its existing id.
    fn upsert(&self, item: Item) -> Result<(), StoreError>;
}

/// Configuration for selecting and building an item store.
///
/// # Example
/// ```
/// use items::StoreConfig;
///
/// let empty = StoreConfig::in_memory();
/// let seeded = StoreConfig::seeded("/data/items.json");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StoreConfig {
    /// Empty in-memory store.
    #[default]
    InMemory,
    /// In-memory store pre-loaded from a JSON array of items.
    Seeded { path: String },
}

impl StoreConfig {
    pub fn in_memory() -> Self {
        StoreConfig::InMemory
    }

    pub fn seeded<P: Into<String>>(path: P) -> Self {
        StoreConfig::Seeded { path: path.into() }
    }

    /// Build the store described by this configuration.
    pub fn build(&self) -> Result<Box<dyn ItemStore>, StoreError> {
        match self {
            StoreConfig::InMemory => Ok(Box::new(InMemoryItemStore::new())),
            StoreConfig::Seeded { path } => Ok(Box::new(InMemoryItemStore::from_json_file(path)?)),
        }
    }
}

/// An in-memory store using a `RwLock` around an id-ordered map.
pub struct InMemoryItemStore {
    items: RwLock<BTreeMap<ItemId, Item>>,
    next_id: AtomicU64,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Build a store holding `items`. Duplicate ids are rejected.
    pub fn with_items<I>(items: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = Item>,
    {
        let mut map = BTreeMap::new();
        for item in items {
            let id = item.id;
            if map.insert(id, item).is_some() {
                return Err(StoreError::DuplicateId(id.0));
            }
        }
        let next = match map.keys().next_back() {
            Some(last) => next_after(*last)?,
            None => 1,
        };
        Ok(Self {
            items: RwLock::new(map),
            next_id: AtomicU64::new(next),
        })
    }

    /// Load a JSON array of items from `path`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let items: Vec<Item> = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            count = items.len(),
            "seeded item store"
        );
        Self::with_items(items)
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn collect<F>(&self, mut keep: F) -> Result<Vec<Item>, StoreError>
    where
        F: FnMut(&Item) -> bool,
    {
        let guard = self
            .items
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.values().filter(|item| keep(item)).cloned().collect())
    }
}

/// The id that follows `id`, or an error once the id space is used up.
fn next_after(id: ItemId) -> Result<u64, StoreError> {
    id.0.checked_add(1).ok_or(StoreError::IdSpaceExhausted)
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let guard = self
            .items
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.get(&id).cloned())
    }

    fn find_by_reporter(&self, user: UserId) -> Result<Vec<Item>, StoreError> {
        self.collect(|item| item.reported_by == Some(user))
    }

    fn find_by_status(&self, status: ItemStatus) -> Result<Vec<Item>, StoreError> {
        self.collect(|item| item.status == status)
    }

    fn all(&self) -> Result<Vec<Item>, StoreError> {
        self.collect(|_| true)
    }

    fn insert(&self, item: NewItem) -> Result<Item, StoreError> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .map(ItemId)
            .map_err(|_| StoreError::IdSpaceExhausted)?;
        match guard.entry(id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateId(id.0)),
            Entry::Vacant(slot) => Ok(slot.insert(item.into_item(id, Utc::now())).clone()),
        }
    }

    fn upsert(&self, item: Item) -> Result<(), StoreError> {
        let floor = next_after(item.id)?;
        let mut guard = self
            .items
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        self.next_id.fetch_max(floor, Ordering::SeqCst);
        guard.insert(item.id, item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_increasing_ids() {
        let store = InMemoryItemStore::new();
        let a = store.insert(NewItem::new("a", ItemStatus::Lost)).unwrap();
        let b = store.insert(NewItem::new("b", ItemStatus::Found)).unwrap();
        assert!(b.id > a.id);
        assert!(a.created_at.is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn upsert_moves_the_id_counter_past_explicit_ids() {
        let store = InMemoryItemStore::new();
        store.upsert(Item::new(40, "explicit", ItemStatus::Lost)).unwrap();
        let next = store.insert(NewItem::new("next", ItemStatus::Lost)).unwrap();
        assert_eq!(next.id, ItemId(41));
    }

    #[test]
    fn lookups_filter_by_reporter_and_status() {
        let store = InMemoryItemStore::with_items(vec![
            Item::new(1, "phone", ItemStatus::Lost).reported_by(1),
            Item::new(2, "wallet", ItemStatus::Found).reported_by(2),
            Item::new(3, "keys", ItemStatus::Found).reported_by(1),
        ])
        .unwrap();

        let mine: Vec<_> = store
            .find_by_reporter(UserId(1))
            .unwrap()
            .into_iter()
            .map(|i| i.id.0)
            .collect();
        assert_eq!(mine, vec![1, 3]);

        let found: Vec<_> = store
            .find_by_status(ItemStatus::Found)
            .unwrap()
            .into_iter()
            .map(|i| i.id.0)
            .collect();
        assert_eq!(found, vec![2, 3]);
        assert!(store.get(ItemId(99)).unwrap().is_none());
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let err = InMemoryItemStore::with_items(vec![
            Item::new(1, "a", ItemStatus::Lost),
            Item::new(1, "b", ItemStatus::Found),
        ])
        .err()
        .expect("duplicate ids should fail");
        assert_eq!(err, StoreError::DuplicateId(1));
    }

    #[test]
    fn seed_ending_at_max_id_is_rejected() {
        let seed = vec![Item::new(u64::MAX, "x", ItemStatus::Lost)];
        let result = InMemoryItemStore::with_items(seed);
        assert_eq!(result.err(), Some(StoreError::IdSpaceExhausted));
    }

    #[test]
    fn upsert_at_max_id_fails_without_poisoning_the_store() {
        let store =
            InMemoryItemStore::with_items(vec![Item::new(1, "a", ItemStatus::Lost)]).unwrap();
        let err = store
            .upsert(Item::new(u64::MAX, "x", ItemStatus::Lost))
            .unwrap_err();
        assert_eq!(err, StoreError::IdSpaceExhausted);

        assert_eq!(store.len(), 1);
        assert!(store.get(ItemId(u64::MAX)).unwrap().is_none());
        let next = store.insert(NewItem::new("b", ItemStatus::Found)).unwrap();
        assert_eq!(next.id, ItemId(2));
    }

    #[test]
    fn insert_never_replaces_an_existing_item() {
        let store = InMemoryItemStore::new();
        store.upsert(Item::new(5, "kept", ItemStatus::Lost)).unwrap();
        // Pull the counter back under an occupied id.
        store.next_id.store(5, Ordering::SeqCst);

        let err = store
            .insert(NewItem::new("new", ItemStatus::Found))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(5));
        assert_eq!(store.get(ItemId(5)).unwrap().unwrap().name, "kept");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_stops_when_ids_run_out() {
        let store = InMemoryItemStore::new();
        store.next_id.store(u64::MAX, Ordering::SeqCst);

        let err = store
            .insert(NewItem::new("last", ItemStatus::Lost))
            .unwrap_err();
        assert_eq!(err, StoreError::IdSpaceExhausted);
        assert!(store.is_empty());
    }

    #[test]
    fn len_survives_a_poisoned_lock() {
        let store = std::sync::Arc::new(
            InMemoryItemStore::with_items(vec![
                Item::new(1, "a", ItemStatus::Lost),
                Item::new(2, "b", ItemStatus::Found),
            ])
            .unwrap(),
        );
        let writer = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = writer.items.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(store.items.is_poisoned());
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
