use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use nutri_planner_rs::catalog::{CatalogProvider, MemoryCatalogStore, filter_by_preference};
use nutri_planner_rs::models::{DietaryPreference, FoodItem, FoodSeed};
use nutri_planner_rs::planner::{is_fat_role, is_protein_role, is_vegetable_role};

const CATEGORIES: &[&str] = &[
    "meat", "fish", "eggs", "dairy", "legumes", "plant_protein", "cereals", "pasta", "rice",
    "bars", "vegetables", "fruits", "nuts", "seeds", "oils", "sweets", "drinks",
];

const NAME_PARTS: &[&str] = &[
    "Pollo", "Chicken", "Carne", "Meat", "Pescado", "Fish", "Salmón", "Salmon", "Tofu", "Arroz",
    "Avena", "Manzana", "Brócoli", "Queso", "Nueces", "Pan", "Mango", "Lentejas", "Aceite",
];

const VEGETARIAN_BLOCKLIST: &[&str] = &[
    "pollo", "chicken", "carne", "meat", "pescado", "fish", "salmón", "salmon",
];

/// A random catalog mixing blocked names, unknown categories and high/low carbs.
fn random_catalog(seed: u64, size: usize) -> Vec<FoodItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|i| {
            let first = NAME_PARTS.choose(&mut rng).unwrap();
            let second = NAME_PARTS.choose(&mut rng).unwrap();
            let name = if rng.gen_bool(0.5) {
                format!("{} con {}", first, second)
            } else {
                first.to_string()
            };
            let category = CATEGORIES.choose(&mut rng).unwrap();
            FoodSeed::new(
                &name,
                category,
                rng.gen_range(0.0..900.0),
                rng.gen_range(0.0..40.0),
                rng.gen_range(0.0..80.0),
                rng.gen_range(0.0..100.0),
                None,
            )
            .into_item(i as u64 + 1)
        })
        .collect()
}

fn passes_keto(food: &FoodItem) -> bool {
    food.carbs.unwrap() < 10.0
        || is_protein_role(&food.category)
        || is_fat_role(&food.category)
        || is_vegetable_role(&food.category)
}

#[test]
fn test_keto_exclusion_law() {
    for seed in 0..20 {
        let catalog = random_catalog(seed, 60);
        let kept = filter_by_preference(catalog.clone(), &DietaryPreference::Keto);

        assert!(kept.iter().all(passes_keto), "seed {}", seed);

        let kept_ids: Vec<u64> = kept.iter().map(|f| f.id).collect();
        for food in catalog.iter().filter(|f| !passes_keto(f)) {
            assert!(!kept_ids.contains(&food.id), "seed {} kept {}", seed, food.name);
        }
    }
}

#[test]
fn test_vegetarian_exclusion_law() {
    for seed in 0..20 {
        let catalog = random_catalog(seed, 60);
        let kept = filter_by_preference(catalog, &DietaryPreference::Vegetarian);

        for food in &kept {
            assert!(food.category != "meat" && food.category != "fish");
            let name = food.name.to_lowercase();
            assert!(
                VEGETARIAN_BLOCKLIST.iter().all(|w| !name.contains(w)),
                "seed {} kept {}",
                seed,
                food.name
            );
        }
    }
}

#[test]
fn test_filter_preserves_order() {
    let catalog = random_catalog(7, 40);
    let kept = filter_by_preference(catalog, &DietaryPreference::Keto);
    assert!(kept.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn test_provider_reflects_store_changes() {
    let store = MemoryCatalogStore::with_foods(random_catalog(3, 10));
    let provider = CatalogProvider::new(&store);
    let before = provider.get_catalog(&DietaryPreference::NoPreference).unwrap();

    use nutri_planner_rs::catalog::CatalogStore;
    store
        .bulk_insert_foods(&[FoodSeed::new("Kale", "vegetables", 49.0, 4.3, 8.8, 0.9, None)])
        .unwrap();

    let after = provider.get_catalog(&DietaryPreference::NoPreference).unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().map(|f| f.name.as_str()), Some("Kale"));
}
