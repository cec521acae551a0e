use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::catalog::store::{CatalogStore, StoreResult, last_id, materialize_seeds};
use crate::error::StorageError;
use crate::models::{FoodItem, FoodSeed};

/// Catalog kept in a JSON file.
///
/// A missing file is an empty catalog. Writes go to a sibling temporary file
/// that is renamed over the target, so a failed write never leaves a partial
/// catalog behind.
#[derive(Debug)]
pub struct JsonCatalogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonCatalogStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<Vec<FoodItem>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Catalog file not found, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, foods: &[FoodItem]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(foods)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Io(e));
        }
        Ok(())
    }
}

impl CatalogStore for JsonCatalogStore {
    fn count_foods(&self) -> StoreResult<usize> {
        Ok(self.load()?.len())
    }

    fn bulk_insert_foods(&self, items: &[FoodSeed]) -> StoreResult<Vec<FoodItem>> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut foods = self.load()?;
        let inserted = materialize_seeds(items, last_id(&foods))?;
        foods.extend(inserted.iter().cloned());
        self.save(&foods)?;
        Ok(inserted)
    }

    fn list_foods(&self) -> StoreResult<Vec<FoodItem>> {
        self.load()
    }

    fn seed_if_empty(&self, items: &[FoodSeed]) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        if !self.load()?.is_empty() {
            return Ok(false);
        }
        let seeded = materialize_seeds(items, 0)?;
        self.save(&seeded)?;
        info!(count = seeded.len(), path = %self.path.display(), "Seeded food catalog file");
        Ok(true)
    }
}
