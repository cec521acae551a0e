use std::collections::HashMap;

use crate::models::{FoodItem, MealLog, MealType, NutritionPlan};
use crate::planner::constants::GRAMS_PER_FACT_UNIT;

/// Display a nutrition plan; `catalog` resolves entry ids to names.
pub fn display_nutrition_plan(plan: &NutritionPlan, catalog: &[FoodItem]) {
    let by_id: HashMap<u64, &FoodItem> = catalog.iter().map(|f| (f.id, f)).collect();

    println!();
    println!("=== Nutrition Plan ===");
    println!("{}", plan.macros.description);
    println!(
        "Targets: protein {} | carbs {} | fat {}",
        plan.macros.protein, plan.macros.carbs, plan.macros.fat
    );

    for meal_type in MealType::ALL {
        display_meal(plan.meals.get(meal_type), &by_id);
    }

    println!();
    println!("--- Summary ---");
    println!("Calorie target: {}", plan.calorie_target);
    println!("Planned calories: {}", plan.total_calories());
    println!();
}

fn display_meal(meal: &MealLog, by_id: &HashMap<u64, &FoodItem>) {
    println!();
    println!(
        "[{}] {} kcal | P:{} C:{} F:{}",
        meal.meal_type, meal.calories, meal.protein, meal.carbs, meal.fat
    );

    if meal.entries.is_empty() {
        println!("  (no matching foods in catalog)");
        return;
    }

    let max_name_len = meal
        .entries
        .iter()
        .filter_map(|e| by_id.get(&e.food_id).map(|f| f.name.chars().count()))
        .max()
        .unwrap_or(10);

    for entry in &meal.entries {
        let name = by_id
            .get(&entry.food_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| format!("food #{}", entry.food_id));
        println!(
            "  - {:<width$}  {:>6.0} g",
            name,
            entry.quantity * GRAMS_PER_FACT_UNIT,
            width = max_name_len
        );
    }
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!("  {}", food.debug_string());
    }

    println!();
}
