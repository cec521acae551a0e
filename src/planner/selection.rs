use crate::models::{DietaryPreference, FoodItem, MealType};
use crate::planner::constants::*;
use crate::planner::roles::FoodRole;

/// How a refinement combines its category and name conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Category and name must both match (an empty list matches anything).
    All,
    /// Either the category or the name must match.
    Any,
}

/// Slot-specific narrowing of a role's candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refinement {
    pub categories: &'static [&'static str],
    pub name_hints: &'static [&'static str],
    pub name_excludes: &'static [&'static str],
    pub mode: MatchMode,
}

impl Refinement {
    /// No narrowing: every food of the role qualifies.
    pub const BROAD: Refinement = Refinement {
        categories: &[],
        name_hints: &[],
        name_excludes: &[],
        mode: MatchMode::All,
    };

    const fn all(categories: &'static [&'static str], name_hints: &'static [&'static str]) -> Self {
        Self {
            categories,
            name_hints,
            name_excludes: &[],
            mode: MatchMode::All,
        }
    }

    const fn any(categories: &'static [&'static str], name_hints: &'static [&'static str]) -> Self {
        Self {
            categories,
            name_hints,
            name_excludes: &[],
            mode: MatchMode::Any,
        }
    }

    const fn excluding(name_excludes: &'static [&'static str]) -> Self {
        Self {
            categories: &[],
            name_hints: &[],
            name_excludes,
            mode: MatchMode::All,
        }
    }

    pub fn accepts(&self, food: &FoodItem) -> bool {
        let name = food.key();
        if self.name_excludes.iter().any(|n| name.contains(n)) {
            return false;
        }

        let category_ok = self.categories.contains(&food.category.as_str());
        let name_ok = self.name_hints.iter().any(|h| name.contains(h));

        match self.mode {
            MatchMode::All => {
                (self.categories.is_empty() || category_ok)
                    && (self.name_hints.is_empty() || name_ok)
            }
            MatchMode::Any => {
                (self.categories.is_empty() && self.name_hints.is_empty()) || category_ok || name_ok
            }
        }
    }
}

/// How many foods of one role a slot wants, and which ones qualify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleRequest {
    pub role: FoodRole,
    pub count: usize,
    /// Leading candidates to pass over before picking.
    pub skip: usize,
    pub refinement: Refinement,
}

impl RoleRequest {
    fn new(role: FoodRole, count: usize, refinement: Refinement) -> Self {
        Self {
            role,
            count,
            skip: 0,
            refinement,
        }
    }

    fn skipping(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

/// Candidate search tier. The refined tier is tried first; the broad tier
/// ignores refinements and only runs when the refined tier finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Refined,
    Broad,
}

/// A food picked for a slot along with the role it fills.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub food: &'a FoodItem,
    pub role: FoodRole,
}

/// Role-count plan for a slot under a dietary preference.
pub fn slot_plan(meal_type: MealType, preference: &DietaryPreference) -> Vec<RoleRequest> {
    use FoodRole::*;

    let keto = preference.is_keto();
    match meal_type {
        MealType::Breakfast => {
            let protein = Refinement::all(EGG_DAIRY_CATEGORIES, BREAKFAST_PROTEIN_HINTS);
            let fat = Refinement::all(&[], BREAKFAST_FAT_HINTS);
            if keto {
                vec![RoleRequest::new(Protein, 2, protein), RoleRequest::new(Fat, 2, fat)]
            } else {
                vec![
                    RoleRequest::new(Protein, 1, protein),
                    RoleRequest::new(Carb, 1, Refinement::all(&["cereals"], BREAKFAST_CARB_HINTS)),
                    RoleRequest::new(Fruit, 1, Refinement::BROAD),
                    RoleRequest::new(Fat, 1, fat),
                ]
            }
        }
        MealType::Lunch => {
            let mut plan = vec![RoleRequest::new(Protein, 1, Refinement::BROAD)];
            if !keto {
                plan.push(RoleRequest::new(Carb, 1, Refinement::excluding(OAT_NAMES)));
            }
            plan.push(RoleRequest::new(Vegetable, 2, Refinement::BROAD));
            plan.push(RoleRequest::new(
                Fat,
                1,
                Refinement::any(OIL_CATEGORIES, COOKING_OIL_HINTS),
            ));
            plan
        }
        MealType::Dinner => vec![
            RoleRequest::new(Protein, 1, Refinement::BROAD).skipping(1),
            RoleRequest::new(Vegetable, 2, Refinement::BROAD),
            RoleRequest::new(Fat, 1, Refinement::BROAD),
            RoleRequest::new(Carb, if keto { 0 } else { 1 }, Refinement::excluding(OAT_NAMES)),
        ],
        MealType::Snack => vec![
            RoleRequest::new(
                Protein,
                1,
                Refinement::all(EGG_DAIRY_CATEGORIES, SNACK_PROTEIN_HINTS),
            ),
            RoleRequest::new(Fruit, if keto { 0 } else { 1 }, Refinement::BROAD),
            RoleRequest::new(Fat, 1, Refinement::any(NUT_SEED_CATEGORIES, SNACK_FAT_HINTS)),
        ],
    }
}

/// Apply a role-count plan to an ordered catalog at one tier.
pub fn select_for_tier<'a>(
    ordered: &[&'a FoodItem],
    plan: &[RoleRequest],
    tier: Tier,
) -> Vec<Selection<'a>> {
    let mut picked = Vec::new();

    for request in plan {
        let candidates = ordered
            .iter()
            .copied()
            .filter(|f| request.role.matches(&f.category))
            .filter(|f| tier == Tier::Broad || request.refinement.accepts(f))
            .skip(request.skip)
            .take(request.count);

        picked.extend(candidates.map(|food| Selection {
            food,
            role: request.role,
        }));
    }

    picked
}

/// Pick the foods for a slot.
///
/// Malformed records are ignored and the catalog is ordered by id, so the
/// result depends only on the catalog contents. Returns the first non-empty
/// tier, or an empty list if neither tier finds anything.
///
/// The broad tier only runs when the refined tier picks nothing at all; a
/// partial refined pick is returned as is, even if some roles stay unfilled.
pub fn select_foods<'a>(
    meal_type: MealType,
    catalog: &'a [FoodItem],
    preference: &DietaryPreference,
) -> (Vec<Selection<'a>>, Option<Tier>) {
    let mut ordered: Vec<&FoodItem> = catalog.iter().filter(|f| f.is_well_formed()).collect();
    ordered.sort_by_key(|f| f.id);

    let plan = slot_plan(meal_type, preference);

    [Tier::Refined, Tier::Broad]
        .into_iter()
        .map(|tier| (select_for_tier(&ordered, &plan, tier), tier))
        .find(|(selections, _)| !selections.is_empty())
        .map(|(selections, tier)| (selections, Some(tier)))
        .unwrap_or((Vec::new(), None))
}
