use tracing::debug;

use crate::catalog::filter::filter_by_preference;
use crate::catalog::seed::default_seed;
use crate::catalog::store::CatalogStore;
use crate::error::Result;
use crate::models::{DietaryPreference, FoodItem, FoodSeed};

/// Read side of the catalog used by the planner.
///
/// Every call goes back to the store, so newly stored foods are always seen.
pub struct CatalogProvider<'a, S: CatalogStore + ?Sized> {
    store: &'a S,
    seed: Vec<FoodSeed>,
}

impl<'a, S: CatalogStore + ?Sized> CatalogProvider<'a, S> {
    /// Provider that seeds an empty store with the built-in catalog.
    pub fn new(store: &'a S) -> Self {
        Self::with_seed(store, default_seed())
    }

    pub fn with_seed(store: &'a S, seed: Vec<FoodSeed>) -> Self {
        Self { store, seed }
    }

    /// Seed the store if it is empty. Returns whether seeding happened.
    pub fn ensure_seeded(&self) -> Result<bool> {
        Ok(self.store.seed_if_empty(&self.seed)?)
    }

    /// All usable foods compatible with `preference`, ordered by id.
    ///
    /// An empty result is valid; store failures are returned as
    /// `StorageUnavailable`.
    pub fn get_catalog(&self, preference: &DietaryPreference) -> Result<Vec<FoodItem>> {
        self.ensure_seeded()?;

        let mut foods = self.store.list_foods()?;
        foods.sort_by_key(|f| f.id);

        let total = foods.len();
        foods.retain(|f| {
            let ok = f.is_well_formed();
            if !ok {
                debug!(food = %f.debug_string(), "Skipping incomplete catalog record");
            }
            ok
        });

        let filtered = filter_by_preference(foods, preference);
        debug!(
            total,
            kept = filtered.len(),
            preference = %preference,
            "Loaded food catalog"
        );
        Ok(filtered)
    }
}
