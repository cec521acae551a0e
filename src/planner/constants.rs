use std::collections::HashMap;
use std::sync::LazyLock;

use crate::planner::roles::FoodRole;

/// Catalog nutrition facts are expressed per this many grams.
pub const GRAMS_PER_FACT_UNIT: f64 = 100.0;

/// Serving size assumed when a food has none recorded.
pub const DEFAULT_SERVING_GRAMS: f64 = 100.0;

/// Calorie target assumed when the profile has none (or a non-positive one).
pub const DEFAULT_CALORIE_TARGET: f64 = 2000.0;

/// Energy density of protein, kcal per gram.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate, kcal per gram.
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy density of fat, kcal per gram.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Keto keeps anything under this many grams of carbs per 100g.
pub const KETO_CARB_LIMIT: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Quantity multipliers (servings)
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_MULT_GAIN_MUSCLE: f64 = 1.2;
pub const CARB_MULT_LOSE_WEIGHT: f64 = 0.8;
pub const VEGETABLE_MULT: f64 = 1.5;
pub const FAT_MULT_LOSE_WEIGHT: f64 = 0.7;
pub const BASE_MULT: f64 = 1.0;

/// Snack portions are this fraction of a regular portion.
pub const SNACK_PORTION_FACTOR: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Classification tables
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_CATEGORIES: &[&str] = &["meat", "fish", "eggs", "dairy", "legumes", "plant_protein"];
pub const CARB_CATEGORIES: &[&str] = &["cereals", "pasta", "rice", "bars"];
pub const VEGETABLE_CATEGORIES: &[&str] = &["vegetables"];
pub const FRUIT_CATEGORIES: &[&str] = &["fruits"];
pub const FAT_CATEGORIES: &[&str] = &["nuts", "seeds", "oils"];

/// Map from category to functional role.
pub static CATEGORY_ROLES: LazyLock<HashMap<&'static str, FoodRole>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for role in FoodRole::ALL {
        for category in role_categories(role) {
            m.insert(*category, role);
        }
    }
    m
});

/// Categories belonging to a role.
pub fn role_categories(role: FoodRole) -> &'static [&'static str] {
    match role {
        FoodRole::Protein => PROTEIN_CATEGORIES,
        FoodRole::Carb => CARB_CATEGORIES,
        FoodRole::Vegetable => VEGETABLE_CATEGORIES,
        FoodRole::Fruit => FRUIT_CATEGORIES,
        FoodRole::Fat => FAT_CATEGORIES,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Vegetarian blocklist
// ─────────────────────────────────────────────────────────────────────────────

/// Name fragments (lowercase, Spanish and English) that mark meat, fish or poultry.
pub const MEAT_NAME_BLOCKLIST: &[&str] = &[
    "pollo", "chicken", "carne", "meat", "pescado", "fish", "salmón", "salmon", "atún", "atun",
    "pavo", "turkey", "cerdo", "pork", "ternera", "jamón",
];

/// Categories a vegetarian catalog never contains.
pub const MEAT_CATEGORIES: &[&str] = &["meat", "fish"];

// ─────────────────────────────────────────────────────────────────────────────
// Slot name hints
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_PROTEIN_HINTS: &[&str] = &["huevo", "egg", "yogur", "yogurt", "cottage"];
pub const BREAKFAST_CARB_HINTS: &[&str] = &["avena", "oat", "pan", "bread"];
pub const BREAKFAST_FAT_HINTS: &[&str] = &["aguacate", "avocado", "almendra", "almond"];
pub const OAT_NAMES: &[&str] = &["avena", "oat"];
pub const COOKING_OIL_HINTS: &[&str] = &["aceite", "oil"];
pub const SNACK_PROTEIN_HINTS: &[&str] = &["yogur", "yogurt", "huevo", "egg"];
pub const SNACK_FAT_HINTS: &[&str] = &["almendra", "almond", "chía", "chia"];

pub const EGG_DAIRY_CATEGORIES: &[&str] = &["eggs", "dairy"];
pub const OIL_CATEGORIES: &[&str] = &["oils"];
pub const NUT_SEED_CATEGORIES: &[&str] = &["nuts", "seeds"];
