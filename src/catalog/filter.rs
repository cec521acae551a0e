use crate::models::{DietaryPreference, FoodItem};
use crate::planner::constants::{KETO_CARB_LIMIT, MEAT_CATEGORIES, MEAT_NAME_BLOCKLIST};
use crate::planner::roles::{is_fat_role, is_protein_role, is_vegetable_role};

/// Whether a food belongs in a vegetarian catalog.
///
/// The name blocklist and the category check are independent; failing either
/// excludes the food.
pub fn is_vegetarian(food: &FoodItem) -> bool {
    let name = food.key();
    let name_blocked = MEAT_NAME_BLOCKLIST.iter().any(|w| name.contains(w));
    let category_blocked = MEAT_CATEGORIES.contains(&food.category.as_str());
    !name_blocked && !category_blocked
}

/// Whether a food belongs in a keto catalog.
///
/// Any one condition is enough: low carbs, or a protein, fat or vegetable role.
pub fn is_keto_friendly(food: &FoodItem) -> bool {
    let low_carb = food.carbs.is_some_and(|c| c < KETO_CARB_LIMIT);
    low_carb
        || is_protein_role(&food.category)
        || is_fat_role(&food.category)
        || is_vegetable_role(&food.category)
}

/// Whether a food survives the given preference.
pub fn allows(preference: &DietaryPreference, food: &FoodItem) -> bool {
    match preference {
        DietaryPreference::Vegetarian => is_vegetarian(food),
        DietaryPreference::Keto => is_keto_friendly(food),
        DietaryPreference::NoPreference | DietaryPreference::Other(_) => true,
    }
}

/// Keep only the foods compatible with a dietary preference, preserving order.
pub fn filter_by_preference(foods: Vec<FoodItem>, preference: &DietaryPreference) -> Vec<FoodItem> {
    foods.into_iter().filter(|f| allows(preference, f)).collect()
}
