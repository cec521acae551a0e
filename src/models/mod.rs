pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodItem, FoodSeed, NutritionFacts};
pub use plan::{MacroSummary, MealEntry, MealLog, MealType, NutritionPlan, PlanMeals};
pub use profile::{DietaryPreference, Goal, NutritionProfile};
