use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the four fixed slots of a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Slots in the order a plan is assembled.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected food and its gram ratio (grams / 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub food_id: u64,
    pub quantity: f64,
}

/// Assembled result for one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealLog {
    pub user_id: String,
    /// Generation time, not consumption time.
    pub logged_at: DateTime<Utc>,
    pub meal_type: MealType,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub entries: Vec<MealEntry>,
}

impl MealLog {
    pub fn empty(user_id: &str, logged_at: DateTime<Utc>, meal_type: MealType) -> Self {
        Self {
            user_id: user_id.to_string(),
            logged_at,
            meal_type,
            calories: 0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Target macros rendered as `"<grams>g (<percent>%)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSummary {
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub description: String,
}

/// The four slot results keyed by slot name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMeals {
    pub breakfast: MealLog,
    pub lunch: MealLog,
    pub dinner: MealLog,
    pub snack: MealLog,
}

impl PlanMeals {
    pub fn get(&self, meal_type: MealType) -> &MealLog {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MealLog> {
        [&self.breakfast, &self.lunch, &self.dinner, &self.snack].into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    pub macros: MacroSummary,
    pub meals: PlanMeals,
    pub calorie_target: u32,
}

impl NutritionPlan {
    /// Sum of assembled calories across all slots.
    pub fn total_calories(&self) -> u32 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}
