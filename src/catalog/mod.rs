pub mod filter;
pub mod persistence;
pub mod provider;
pub mod search;
pub mod seed;
pub mod store;

pub use filter::{filter_by_preference, is_keto_friendly, is_vegetarian};
pub use persistence::JsonCatalogStore;
pub use provider::CatalogProvider;
pub use search::{foods_in_category, search_foods, suggest};
pub use seed::{default_seed, load_seed_csv, read_seed_file};
pub use store::{CatalogStore, MemoryCatalogStore, StoreResult};
