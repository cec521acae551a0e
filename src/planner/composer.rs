use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::{CatalogProvider, CatalogStore};
use crate::error::Result;
use crate::models::{
    FoodItem, MacroSummary, MealType, NutritionPlan, NutritionProfile, PlanMeals,
};
use crate::planner::assembler::{AssemblyContext, assemble_meal};
use crate::planner::constants::{
    DEFAULT_CALORIE_TARGET, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};

/// Calorie target used for percentages; absent or non-positive targets fall
/// back to the default.
pub fn effective_calorie_target(profile: &NutritionProfile) -> f64 {
    match profile.daily_calorie_target {
        Some(c) if c.is_finite() && c > 0.0 => c,
        _ => DEFAULT_CALORIE_TARGET,
    }
}

/// Share of the calorie target supplied by `grams` of a macro, in whole percent.
pub fn macro_percent(grams: f64, kcal_per_gram: f64, calorie_target: f64) -> i64 {
    (grams * kcal_per_gram / calorie_target * 100.0).round() as i64
}

/// `"<grams>g (<percent>%)"`.
pub fn format_macro(grams: f64, percent: i64) -> String {
    format!("{}g ({}%)", grams, percent)
}

/// Macro breakdown computed from the profile's targets.
pub fn macro_summary(profile: &NutritionProfile) -> MacroSummary {
    let calories = effective_calorie_target(profile);
    let protein = profile.daily_protein_target.unwrap_or(0.0);
    let carbs = profile.daily_carb_target.unwrap_or(0.0);
    let fat = profile.daily_fat_target.unwrap_or(0.0);

    MacroSummary {
        protein: format_macro(protein, macro_percent(protein, KCAL_PER_GRAM_PROTEIN, calories)),
        carbs: format_macro(carbs, macro_percent(carbs, KCAL_PER_GRAM_CARBS, calories)),
        fat: format_macro(fat, macro_percent(fat, KCAL_PER_GRAM_FAT, calories)),
        description: format!(
            "Plan para {} con {} kcal diarias",
            profile.goal.translation(),
            calories.round() as u32
        ),
    }
}

/// Assemble all four slots from an already-filtered catalog.
pub fn compose_plan(
    catalog: &[FoodItem],
    profile: &NutritionProfile,
    generated_at: DateTime<Utc>,
) -> NutritionPlan {
    let ctx = AssemblyContext::new(&profile.user_id, generated_at);
    let meal = |meal_type: MealType| {
        assemble_meal(
            meal_type,
            catalog,
            &profile.goal,
            &profile.dietary_preference,
            &ctx,
        )
    };

    NutritionPlan {
        macros: macro_summary(profile),
        meals: PlanMeals {
            breakfast: meal(MealType::Breakfast),
            lunch: meal(MealType::Lunch),
            dinner: meal(MealType::Dinner),
            snack: meal(MealType::Snack),
        },
        calorie_target: effective_calorie_target(profile).round() as u32,
    }
}

/// Load the catalog once through `provider` and build the plan.
pub fn generate_plan<S: CatalogStore + ?Sized>(
    provider: &CatalogProvider<'_, S>,
    profile: &NutritionProfile,
    generated_at: DateTime<Utc>,
) -> Result<NutritionPlan> {
    let catalog = provider.get_catalog(&profile.dietary_preference)?;
    let plan = compose_plan(&catalog, profile, generated_at);

    info!(
        user = %profile.user_id,
        goal = %profile.goal,
        preference = %profile.dietary_preference,
        catalog_size = catalog.len(),
        total_calories = plan.total_calories(),
        "Created nutrition plan"
    );
    Ok(plan)
}

/// Build a nutrition plan for `profile`, seeding `store` with the built-in
/// catalog if it is empty.
pub fn create_nutrition_plan<S: CatalogStore + ?Sized>(
    store: &S,
    profile: &NutritionProfile,
) -> Result<NutritionPlan> {
    generate_plan(&CatalogProvider::new(store), profile, Utc::now())
}

/// Same as [`create_nutrition_plan`] with a fixed generation time.
pub fn create_nutrition_plan_at<S: CatalogStore + ?Sized>(
    store: &S,
    profile: &NutritionProfile,
    generated_at: DateTime<Utc>,
) -> Result<NutritionPlan> {
    generate_plan(&CatalogProvider::new(store), profile, generated_at)
}
