use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planner::constants::{CATEGORY_ROLES, role_categories};

/// Coarse nutritional role derived from a food's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodRole {
    Protein,
    Carb,
    Vegetable,
    Fruit,
    Fat,
}

impl FoodRole {
    pub const ALL: [FoodRole; 5] = [
        FoodRole::Protein,
        FoodRole::Carb,
        FoodRole::Vegetable,
        FoodRole::Fruit,
        FoodRole::Fat,
    ];

    /// Whether `category` belongs to this role.
    pub fn matches(&self, category: &str) -> bool {
        role_categories(*self).contains(&category)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodRole::Protein => "protein",
            FoodRole::Carb => "carb",
            FoodRole::Vegetable => "vegetable",
            FoodRole::Fruit => "fruit",
            FoodRole::Fat => "fat",
        }
    }
}

impl fmt::Display for FoodRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a category, or `None` for categories outside the vocabulary.
pub fn classify(category: &str) -> Option<FoodRole> {
    CATEGORY_ROLES.get(category).copied()
}

pub fn is_protein_role(category: &str) -> bool {
    FoodRole::Protein.matches(category)
}

pub fn is_carb_role(category: &str) -> bool {
    FoodRole::Carb.matches(category)
}

pub fn is_vegetable_role(category: &str) -> bool {
    FoodRole::Vegetable.matches(category)
}

pub fn is_fruit_role(category: &str) -> bool {
    FoodRole::Fruit.matches(category)
}

pub fn is_fat_role(category: &str) -> bool {
    FoodRole::Fat.matches(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_categories() {
        for c in ["meat", "fish", "eggs", "dairy", "legumes", "plant_protein"] {
            assert!(is_protein_role(c), "{} should be protein", c);
        }
        assert!(!is_protein_role("rice"));
    }

    #[test]
    fn test_other_roles() {
        assert!(is_carb_role("bars"));
        assert!(is_vegetable_role("vegetables"));
        assert!(is_fruit_role("fruits"));
        assert!(is_fat_role("oils"));
        assert!(!is_fat_role("fruits"));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        assert_eq!(classify("sweets"), None);
        assert_eq!(classify(""), None);
        assert!(FoodRole::ALL.iter().all(|r| !r.matches("sweets")));
    }

    #[test]
    fn test_classify_is_exclusive() {
        assert_eq!(classify("seeds"), Some(FoodRole::Fat));
        assert_eq!(classify("pasta"), Some(FoodRole::Carb));
        for role in FoodRole::ALL {
            for category in role_categories(role) {
                let owners = FoodRole::ALL.iter().filter(|r| r.matches(category)).count();
                assert_eq!(owners, 1, "{} claimed by {} roles", category, owners);
            }
        }
    }
}
