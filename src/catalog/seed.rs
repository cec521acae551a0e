use std::path::Path;

use crate::catalog::store::StoreResult;
use crate::error::{PlannerError, Result};
use crate::models::FoodSeed;

/// Built-in catalog used when the store is first found empty.
///
/// Facts are per 100g; serving sizes are typical single portions.
pub fn default_seed() -> Vec<FoodSeed> {
    vec![
        // Proteins
        FoodSeed::new("Pechuga de pollo (Chicken breast)", "meat", 165.0, 31.0, 0.0, 3.6, Some(150.0)),
        FoodSeed::new("Carne de ternera magra (Lean beef)", "meat", 250.0, 26.0, 0.0, 15.0, Some(150.0)),
        FoodSeed::new("Pavo (Turkey breast)", "meat", 135.0, 30.0, 0.0, 1.0, Some(150.0)),
        FoodSeed::new("Salmón (Salmon)", "fish", 208.0, 20.0, 0.0, 13.0, Some(150.0)),
        FoodSeed::new("Atún en agua (Tuna)", "fish", 116.0, 26.0, 0.0, 1.0, Some(120.0)),
        FoodSeed::new("Merluza (Hake)", "fish", 90.0, 18.0, 0.0, 1.3, Some(150.0)),
        FoodSeed::new("Huevo (Egg)", "eggs", 155.0, 13.0, 1.1, 11.0, Some(100.0)),
        FoodSeed::new("Claras de huevo (Egg whites)", "eggs", 52.0, 11.0, 0.7, 0.2, Some(100.0)),
        FoodSeed::new("Yogur griego (Greek yogurt)", "dairy", 97.0, 9.0, 3.6, 5.0, Some(125.0)),
        FoodSeed::new("Queso cottage (Cottage cheese)", "dairy", 98.0, 11.0, 3.4, 4.3, Some(100.0)),
        FoodSeed::new("Leche desnatada (Skim milk)", "dairy", 34.0, 3.4, 5.0, 0.1, Some(250.0)),
        FoodSeed::new("Lentejas cocidas (Cooked lentils)", "legumes", 116.0, 9.0, 20.0, 0.4, Some(150.0)),
        FoodSeed::new("Garbanzos cocidos (Cooked chickpeas)", "legumes", 164.0, 8.9, 27.0, 2.6, Some(150.0)),
        FoodSeed::new("Tofu firme (Firm tofu)", "plant_protein", 144.0, 17.0, 2.8, 8.7, Some(150.0)),
        FoodSeed::new("Tempeh", "plant_protein", 192.0, 20.0, 7.6, 11.0, Some(100.0)),
        // Carbohydrates
        FoodSeed::new("Avena (Oats)", "cereals", 389.0, 16.9, 66.3, 6.9, Some(50.0)),
        FoodSeed::new("Pan integral (Whole wheat bread)", "cereals", 247.0, 13.0, 41.0, 3.4, Some(60.0)),
        FoodSeed::new("Quinoa cocida (Cooked quinoa)", "cereals", 120.0, 4.4, 21.3, 1.9, Some(150.0)),
        FoodSeed::new("Pasta integral cocida (Whole wheat pasta)", "pasta", 124.0, 5.3, 26.5, 0.5, Some(180.0)),
        FoodSeed::new("Arroz integral cocido (Brown rice)", "rice", 112.0, 2.3, 23.5, 0.8, Some(180.0)),
        FoodSeed::new("Arroz blanco cocido (White rice)", "rice", 130.0, 2.7, 28.2, 0.3, Some(180.0)),
        FoodSeed::new("Barrita de cereales (Cereal bar)", "bars", 400.0, 8.0, 68.0, 11.0, Some(30.0)),
        // Vegetables
        FoodSeed::new("Brócoli (Broccoli)", "vegetables", 34.0, 2.8, 7.0, 0.4, Some(150.0)),
        FoodSeed::new("Espinacas (Spinach)", "vegetables", 23.0, 2.9, 3.6, 0.4, Some(100.0)),
        FoodSeed::new("Calabacín (Zucchini)", "vegetables", 17.0, 1.2, 3.1, 0.3, Some(150.0)),
        FoodSeed::new("Tomate (Tomato)", "vegetables", 18.0, 0.9, 3.9, 0.2, Some(120.0)),
        FoodSeed::new("Pimiento rojo (Red pepper)", "vegetables", 31.0, 1.0, 6.0, 0.3, Some(120.0)),
        FoodSeed::new("Coliflor (Cauliflower)", "vegetables", 25.0, 1.9, 5.0, 0.3, Some(150.0)),
        // Fruits
        FoodSeed::new("Plátano (Banana)", "fruits", 89.0, 1.1, 22.8, 0.3, Some(120.0)),
        FoodSeed::new("Manzana (Apple)", "fruits", 52.0, 0.3, 13.8, 0.2, Some(150.0)),
        FoodSeed::new("Fresas (Strawberries)", "fruits", 32.0, 0.7, 7.7, 0.3, Some(150.0)),
        FoodSeed::new("Arándanos (Blueberries)", "fruits", 57.0, 0.7, 14.5, 0.3, Some(100.0)),
        FoodSeed::new("Naranja (Orange)", "fruits", 47.0, 0.9, 11.8, 0.1, Some(150.0)),
        // Fats
        FoodSeed::new("Almendras (Almonds)", "nuts", 579.0, 21.2, 21.6, 49.9, Some(30.0)),
        FoodSeed::new("Nueces (Walnuts)", "nuts", 654.0, 15.2, 13.7, 65.2, Some(30.0)),
        FoodSeed::new("Aguacate (Avocado)", "oils", 160.0, 2.0, 8.5, 14.7, Some(100.0)),
        FoodSeed::new("Semillas de chía (Chia seeds)", "seeds", 486.0, 16.5, 42.1, 30.7, Some(15.0)),
        FoodSeed::new("Semillas de lino (Flaxseed)", "seeds", 534.0, 18.3, 28.9, 42.2, Some(15.0)),
        FoodSeed::new("Aceite de oliva (Olive oil)", "oils", 884.0, 0.0, 0.0, 100.0, Some(10.0)),
    ]
}

/// Read seed records from a CSV file with the header
/// `name,category,calories,protein,carbs,fat,serving_size`.
///
/// `serving_size` may be left empty.
pub fn load_seed_csv<P: AsRef<Path>>(path: P) -> StoreResult<Vec<FoodSeed>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut seeds = Vec::new();
    for record in reader.deserialize() {
        let seed: FoodSeed = record?;
        seeds.push(seed);
    }
    Ok(seeds)
}

/// Load a seed file named by the user. Parse and read failures are reported
/// as invalid input rather than as a storage fault.
pub fn read_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<FoodSeed>> {
    let path = path.as_ref();
    load_seed_csv(path).map_err(|e| {
        PlannerError::InvalidInput(format!("seed file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::roles::FoodRole;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_seed_is_valid() {
        let seeds = default_seed();
        assert!(seeds.len() >= 30);
        for seed in &seeds {
            assert!(seed.validation_error().is_none(), "invalid seed {}", seed.name);
        }
    }

    #[test]
    fn test_default_seed_covers_every_role() {
        let seeds = default_seed();
        for role in FoodRole::ALL {
            assert!(
                seeds.iter().any(|s| role.matches(&s.category)),
                "no seed for role {}",
                role
            );
        }
    }

    #[test]
    fn test_load_seed_csv() {
        let csv = "name,category,calories,protein,carbs,fat,serving_size\n\
                   Huevo,eggs,155,13,1.1,11,50\n\
                   Arroz, rice ,130,2.7,28,0.3,\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let seeds = load_seed_csv(file.path()).unwrap();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].serving_size, Some(50.0));
        assert_eq!(seeds[1].category, "rice");
        assert_eq!(seeds[1].serving_size, None);
    }

    #[test]
    fn test_load_seed_csv_rejects_bad_numbers() {
        let csv = "name,category,calories,protein,carbs,fat,serving_size\n\
                   Huevo,eggs,lots,13,1.1,11,50\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        assert!(load_seed_csv(file.path()).is_err());
    }

    #[test]
    fn test_read_seed_file_reports_invalid_input() {
        let csv = "name,category,calories,protein,carbs,fat,serving_size\n\
                   Huevo,eggs,lots,13,1.1,11,50\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let err = read_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput(_)));
        assert!(!err.is_storage_unavailable());
    }

    #[test]
    fn test_read_seed_file_missing_file_is_invalid_input() {
        let err = read_seed_file("/nonexistent/seed.csv").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput(_)));
    }
}
