pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use catalog::{CatalogStore, JsonCatalogStore, MemoryCatalogStore};
pub use error::{PlannerError, Result, StorageError};
pub use models::{FoodItem, MealLog, NutritionPlan, NutritionProfile};
pub use planner::{create_nutrition_plan, create_nutrition_plan_at};
