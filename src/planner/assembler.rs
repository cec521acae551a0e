use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::{DietaryPreference, FoodItem, Goal, MealEntry, MealLog, MealType, NutritionFacts};
use crate::planner::constants::*;
use crate::planner::roles::FoodRole;
use crate::planner::selection::select_foods;

/// Who the meal is for and when it was generated.
#[derive(Debug, Clone)]
pub struct AssemblyContext {
    pub user_id: String,
    pub generated_at: DateTime<Utc>,
}

impl AssemblyContext {
    pub fn new(user_id: &str, generated_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            generated_at,
        }
    }
}

/// Servings of a food for its role under a goal, before any slot adjustment.
pub fn role_multiplier(role: FoodRole, goal: &Goal) -> f64 {
    match (role, goal) {
        (FoodRole::Protein, Goal::GainMuscle) => PROTEIN_MULT_GAIN_MUSCLE,
        (FoodRole::Carb, Goal::LoseWeight) => CARB_MULT_LOSE_WEIGHT,
        (FoodRole::Vegetable, _) => VEGETABLE_MULT,
        (FoodRole::Fat, Goal::LoseWeight) => FAT_MULT_LOSE_WEIGHT,
        _ => BASE_MULT,
    }
}

/// Servings of a food in a given slot.
pub fn portion_multiplier(role: FoodRole, goal: &Goal, meal_type: MealType) -> f64 {
    let base = role_multiplier(role, goal);
    if meal_type == MealType::Snack {
        base * SNACK_PORTION_FACTOR
    } else {
        base
    }
}

/// Convert servings into a ratio of the 100g unit the facts are expressed in.
pub fn gram_ratio(food: &FoodItem, multiplier: f64) -> f64 {
    food.serving_grams() * multiplier / GRAMS_PER_FACT_UNIT
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build the meal for one slot from an already-filtered catalog.
///
/// Never fails: a slot with no matching foods yields an empty log with zero
/// totals.
pub fn assemble_meal(
    meal_type: MealType,
    catalog: &[FoodItem],
    goal: &Goal,
    preference: &DietaryPreference,
    ctx: &AssemblyContext,
) -> MealLog {
    let (selections, tier) = select_foods(meal_type, catalog, preference);

    if selections.is_empty() {
        warn!(
            user = %ctx.user_id,
            meal = %meal_type,
            preference = %preference,
            catalog_size = catalog.len(),
            "No foods matched any role for meal"
        );
        return MealLog::empty(&ctx.user_id, ctx.generated_at, meal_type);
    }

    let mut totals = NutritionFacts::default();
    let mut entries = Vec::with_capacity(selections.len());

    for selection in &selections {
        // select_foods only returns well-formed records.
        let Some(facts) = selection.food.nutrition() else {
            continue;
        };
        let multiplier = portion_multiplier(selection.role, goal, meal_type);
        let ratio = gram_ratio(selection.food, multiplier);

        totals += facts.scaled(ratio);
        entries.push(MealEntry {
            food_id: selection.food.id,
            quantity: ratio,
        });
    }

    debug!(
        meal = %meal_type,
        ?tier,
        items = entries.len(),
        calories = totals.calories,
        "Assembled meal"
    );

    MealLog {
        user_id: ctx.user_id.clone(),
        logged_at: ctx.generated_at,
        meal_type,
        calories: totals.calories.max(0.0).round() as u32,
        protein: round_one_decimal(totals.protein),
        carbs: round_one_decimal(totals.carbs),
        fat: round_one_decimal(totals.fat),
        entries,
    }
}
