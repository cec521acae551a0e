use std::fmt;

use serde::{Deserialize, Serialize};

/// A user's dietary objective.
///
/// Unrecognized values are kept verbatim and behave like a neutral goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainMuscle,
    Other(String),
}

impl Goal {
    pub const KNOWN: [&'static str; 3] = ["lose-weight", "maintain", "gain-muscle"];

    pub fn as_str(&self) -> &str {
        match self {
            Goal::LoseWeight => "lose-weight",
            Goal::Maintain => "maintain",
            Goal::GainMuscle => "gain-muscle",
            Goal::Other(s) => s,
        }
    }

    /// Human-readable label used in plan descriptions.
    pub fn translation(&self) -> &str {
        match self {
            Goal::LoseWeight => "Perder peso",
            Goal::Maintain => "Mantener",
            Goal::GainMuscle => "Ganar músculo",
            Goal::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Goal::Other(_))
    }
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        match value {
            "lose-weight" => Goal::LoseWeight,
            "maintain" => Goal::Maintain,
            "gain-muscle" => Goal::GainMuscle,
            other => Goal::Other(other.to_string()),
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Goal::from(value.as_str())
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.as_str().to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog-level dietary filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietaryPreference {
    Vegetarian,
    Keto,
    NoPreference,
    Other(String),
}

impl DietaryPreference {
    pub const KNOWN: [&'static str; 3] = ["vegetarian", "keto", "no-preference"];

    pub fn as_str(&self) -> &str {
        match self {
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Keto => "keto",
            DietaryPreference::NoPreference => "no-preference",
            DietaryPreference::Other(s) => s,
        }
    }

    pub fn is_keto(&self) -> bool {
        matches!(self, DietaryPreference::Keto)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DietaryPreference::Other(_))
    }
}

impl From<&str> for DietaryPreference {
    fn from(value: &str) -> Self {
        match value {
            "vegetarian" => DietaryPreference::Vegetarian,
            "keto" => DietaryPreference::Keto,
            "no-preference" => DietaryPreference::NoPreference,
            other => DietaryPreference::Other(other.to_string()),
        }
    }
}

impl From<String> for DietaryPreference {
    fn from(value: String) -> Self {
        DietaryPreference::from(value.as_str())
    }
}

impl From<DietaryPreference> for String {
    fn from(pref: DietaryPreference) -> Self {
        pref.as_str().to_string()
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to plan generation, built once at the application boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    pub user_id: String,
    pub goal: Goal,
    pub dietary_preference: DietaryPreference,
    #[serde(default)]
    pub daily_calorie_target: Option<f64>,
    #[serde(default)]
    pub daily_protein_target: Option<f64>,
    #[serde(default)]
    pub daily_carb_target: Option<f64>,
    #[serde(default)]
    pub daily_fat_target: Option<f64>,
}

impl NutritionProfile {
    pub fn new(user_id: &str, goal: Goal, dietary_preference: DietaryPreference) -> Self {
        Self {
            user_id: user_id.to_string(),
            goal,
            dietary_preference,
            daily_calorie_target: None,
            daily_protein_target: None,
            daily_carb_target: None,
            daily_fat_target: None,
        }
    }

    pub fn with_targets(mut self, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        self.daily_calorie_target = Some(calories);
        self.daily_protein_target = Some(protein);
        self.daily_carb_target = Some(carbs);
        self.daily_fat_target = Some(fat);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_parsing() {
        assert_eq!(Goal::from("gain-muscle"), Goal::GainMuscle);
        assert_eq!(Goal::from("bulk"), Goal::Other("bulk".to_string()));
        assert_eq!(Goal::from("bulk").translation(), "bulk");
        assert_eq!(Goal::LoseWeight.translation(), "Perder peso");
    }

    #[test]
    fn test_preference_parsing() {
        assert!(DietaryPreference::from("keto").is_keto());
        assert!(!DietaryPreference::from("paleo").is_known());
    }

    #[test]
    fn test_profile_json_camel_case() {
        let json = r#"{
            "userId": "u-1",
            "goal": "gain-muscle",
            "dietaryPreference": "no-preference",
            "dailyCalorieTarget": 2500,
            "dailyProteinTarget": 180
        }"#;
        let profile: NutritionProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.goal, Goal::GainMuscle);
        assert_eq!(profile.dietary_preference, DietaryPreference::NoPreference);
        assert_eq!(profile.daily_calorie_target, Some(2500.0));
        assert_eq!(profile.daily_fat_target, None);

        let out = serde_json::to_value(&profile).unwrap();
        assert_eq!(out["goal"], "gain-muscle");
        assert_eq!(out["dietaryPreference"], "no-preference");
    }
}
