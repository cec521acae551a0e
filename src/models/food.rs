use serde::{Deserialize, Serialize};

use crate::planner::constants::DEFAULT_SERVING_GRAMS;

/// Macronutrient facts for 100g of a food.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionFacts {
    /// Facts scaled by a gram ratio.
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            calories: self.calories * ratio,
            protein: self.protein * ratio,
            carbs: self.carbs * ratio,
            fat: self.fat * ratio,
        }
    }

    pub fn is_non_negative(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl std::ops::AddAssign for NutritionFacts {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}

/// A catalog entry as stored.
///
/// Numeric fields are optional because a stored record may be incomplete;
/// such records are skipped by the planner instead of failing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub serving_size: Option<f64>,
}

impl FoodItem {
    /// Complete, non-negative nutrition facts, or `None` for a malformed record.
    pub fn nutrition(&self) -> Option<NutritionFacts> {
        let facts = NutritionFacts {
            calories: self.calories?,
            protein: self.protein?,
            carbs: self.carbs?,
            fat: self.fat?,
        };
        facts.is_non_negative().then_some(facts)
    }

    /// Serving size in grams, falling back to 100g when unset.
    pub fn serving_grams(&self) -> f64 {
        self.serving_size.unwrap_or(DEFAULT_SERVING_GRAMS)
    }

    /// Whether the record can take part in meal assembly.
    pub fn is_well_formed(&self) -> bool {
        let serving = self.serving_grams();
        self.nutrition().is_some() && serving.is_finite() && serving > 0.0
    }

    /// Lowercased name used for substring matching.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn debug_string(&self) -> String {
        match self.nutrition() {
            Some(n) => format!(
                "#{} {} [{}]: {} kcal, P:{} C:{} F:{} per 100g, serving {}g",
                self.id,
                self.name,
                self.category,
                n.calories,
                n.protein,
                n.carbs,
                n.fat,
                self.serving_grams()
            ),
            None => format!("#{} {} [{}]: incomplete", self.id, self.name, self.category),
        }
    }
}

/// A catalog record before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSeed {
    pub name: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub serving_size: Option<f64>,
}

impl FoodSeed {
    pub fn new(
        name: &str,
        category: &str,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        serving_size: Option<f64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            calories,
            protein,
            carbs,
            fat,
            serving_size,
        }
    }

    /// Reason this seed cannot be stored, if any.
    pub fn validation_error(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("name is empty".to_string());
        }
        let facts = NutritionFacts {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        };
        if !facts.is_non_negative() {
            return Some("nutrition facts must be non-negative".to_string());
        }
        match self.serving_size {
            Some(s) if !(s.is_finite() && s > 0.0) => {
                Some(format!("serving size must be positive, got {}", s))
            }
            _ => None,
        }
    }

    /// Materialize into a stored item with the given id.
    pub fn into_item(self, id: u64) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            category: self.category,
            calories: Some(self.calories),
            protein: Some(self.protein),
            carbs: Some(self.carbs),
            fat: Some(self.fat),
            serving_size: self.serving_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodSeed::new("Huevo", "eggs", 155.0, 13.0, 1.1, 11.0, Some(50.0)).into_item(1)
    }

    #[test]
    fn test_nutrition_present() {
        let item = sample_item();
        let n = item.nutrition().unwrap();
        assert_eq!(n.calories, 155.0);
        assert_eq!(item.serving_grams(), 50.0);
        assert!(item.is_well_formed());
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let mut item = sample_item();
        item.fat = None;
        assert!(item.nutrition().is_none());
        assert!(!item.is_well_formed());
    }

    #[test]
    fn test_negative_or_zero_serving_is_malformed() {
        let mut item = sample_item();
        item.serving_size = Some(0.0);
        assert!(!item.is_well_formed());

        let mut item = sample_item();
        item.protein = Some(-1.0);
        assert!(!item.is_well_formed());
    }

    #[test]
    fn test_default_serving() {
        let mut item = sample_item();
        item.serving_size = None;
        assert_eq!(item.serving_grams(), 100.0);
    }

    #[test]
    fn test_seed_validation() {
        let ok = FoodSeed::new("Arroz", "rice", 130.0, 2.7, 28.0, 0.3, None);
        assert!(ok.validation_error().is_none());

        let bad = FoodSeed::new("Arroz", "rice", -1.0, 2.7, 28.0, 0.3, None);
        assert!(bad.validation_error().is_some());

        let bad_serving = FoodSeed::new("Arroz", "rice", 130.0, 2.7, 28.0, 0.3, Some(-5.0));
        assert!(bad_serving.validation_error().is_some());
    }

    #[test]
    fn test_deserialize_incomplete_record() {
        let json = r#"{"id": 7, "name": "Mystery", "category": "meat", "calories": 100}"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert!(!item.is_well_formed());
    }
}
