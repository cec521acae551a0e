use std::sync::RwLock;

use tracing::info;

use crate::error::StorageError;
use crate::models::{FoodItem, FoodSeed};

pub type StoreResult<T> = std::result::Result<T, StorageError>;

/// Storage collaborator backing the food catalog.
///
/// Implementations must make `bulk_insert_foods` all-or-nothing.
pub trait CatalogStore: Send + Sync {
    fn count_foods(&self) -> StoreResult<usize>;

    /// Insert every seed or none of them.
    fn bulk_insert_foods(&self, items: &[FoodSeed]) -> StoreResult<Vec<FoodItem>>;

    fn list_foods(&self) -> StoreResult<Vec<FoodItem>>;

    /// Seed the store if it holds no foods. Returns whether seeding happened.
    ///
    /// The default is a plain count-then-insert; stores shared between callers
    /// override it so the check and the insert happen under one lock.
    fn seed_if_empty(&self, items: &[FoodSeed]) -> StoreResult<bool> {
        if self.count_foods()? > 0 {
            return Ok(false);
        }
        let inserted = self.bulk_insert_foods(items)?;
        info!(count = inserted.len(), "Seeded food catalog");
        Ok(true)
    }
}

/// Validate seeds and assign ids starting after `last_id`.
pub(crate) fn materialize_seeds(items: &[FoodSeed], last_id: u64) -> StoreResult<Vec<FoodItem>> {
    items
        .iter()
        .enumerate()
        .map(|(i, seed)| match seed.validation_error() {
            Some(reason) => Err(StorageError::InvalidSeed {
                name: seed.name.clone(),
                reason,
            }),
            None => Ok(seed.clone().into_item(last_id + 1 + i as u64)),
        })
        .collect()
}

pub(crate) fn last_id(foods: &[FoodItem]) -> u64 {
    foods.iter().map(|f| f.id).max().unwrap_or(0)
}

/// In-process catalog.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    foods: RwLock<Vec<FoodItem>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with existing records (ids kept as given).
    pub fn with_foods(foods: Vec<FoodItem>) -> Self {
        Self {
            foods: RwLock::new(foods),
        }
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn count_foods(&self) -> StoreResult<usize> {
        let foods = self.foods.read().map_err(|_| StorageError::Poisoned)?;
        Ok(foods.len())
    }

    fn bulk_insert_foods(&self, items: &[FoodSeed]) -> StoreResult<Vec<FoodItem>> {
        let mut foods = self.foods.write().map_err(|_| StorageError::Poisoned)?;
        let inserted = materialize_seeds(items, last_id(&foods))?;
        foods.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    fn list_foods(&self) -> StoreResult<Vec<FoodItem>> {
        let foods = self.foods.read().map_err(|_| StorageError::Poisoned)?;
        Ok(foods.clone())
    }

    fn seed_if_empty(&self, items: &[FoodSeed]) -> StoreResult<bool> {
        let mut foods = self.foods.write().map_err(|_| StorageError::Poisoned)?;
        if !foods.is_empty() {
            return Ok(false);
        }
        let inserted = materialize_seeds(items, 0)?;
        info!(count = inserted.len(), "Seeded in-memory food catalog");
        *foods = inserted;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds() -> Vec<FoodSeed> {
        vec![
            FoodSeed::new("Huevo", "eggs", 155.0, 13.0, 1.1, 11.0, Some(50.0)),
            FoodSeed::new("Arroz", "rice", 130.0, 2.7, 28.0, 0.3, None),
        ]
    }

    #[test]
    fn test_bulk_insert_assigns_ids() {
        let store = MemoryCatalogStore::new();
        let inserted = store.bulk_insert_foods(&seeds()).unwrap();
        assert_eq!(inserted.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2]);

        let more = store.bulk_insert_foods(&seeds()[..1]).unwrap();
        assert_eq!(more[0].id, 3);
        assert_eq!(store.count_foods().unwrap(), 3);
    }

    #[test]
    fn test_bulk_insert_is_atomic() {
        let store = MemoryCatalogStore::new();
        let mut bad = seeds();
        bad.push(FoodSeed::new("Broken", "meat", -5.0, 1.0, 1.0, 1.0, None));

        let err = store.bulk_insert_foods(&bad).unwrap_err();
        assert!(matches!(err, StorageError::InvalidSeed { .. }));
        assert_eq!(store.count_foods().unwrap(), 0);
    }

    #[test]
    fn test_seed_if_empty_only_once() {
        let store = MemoryCatalogStore::new();
        assert!(store.seed_if_empty(&seeds()).unwrap());
        assert!(!store.seed_if_empty(&seeds()).unwrap());
        assert_eq!(store.count_foods().unwrap(), 2);
    }

    #[test]
    fn test_concurrent_seeding_inserts_once() {
        let store = MemoryCatalogStore::new();
        let seeded: usize = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| store.seed_if_empty(&seeds()).unwrap()))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap() as usize)
                .sum()
        });
        assert_eq!(seeded, 1);
        assert_eq!(store.count_foods().unwrap(), 2);
    }
}
