use strsim::jaro_winkler;

use crate::models::FoodItem;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_THRESHOLD: f64 = 0.7;

/// Foods whose name matches `query`, best first.
///
/// Substring matches (case-insensitive) score 1.0 and come first; the rest
/// are ranked by Jaro-Winkler similarity above [`FUZZY_THRESHOLD`]. Ties keep
/// catalog order.
pub fn search_foods<'a>(foods: &'a [FoodItem], query: &str) -> Vec<(&'a FoodItem, f64)> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(&FoodItem, f64)> = foods
        .iter()
        .filter_map(|f| {
            let name = f.key();
            let score = if name.contains(&query) {
                1.0
            } else {
                jaro_winkler(&name, &query)
            };
            (score > FUZZY_THRESHOLD).then_some((f, score))
        })
        .collect();

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matches
}

/// Foods in exactly the given category.
pub fn foods_in_category<'a>(foods: &'a [FoodItem], category: &str) -> Vec<&'a FoodItem> {
    let category = category.trim();
    foods.iter().filter(|f| f.category == category).collect()
}

/// Closest known value to `input`, if it is a likely typo of one.
pub fn suggest<'a>(input: &str, known: &[&'a str]) -> Option<&'a str> {
    let input = input.to_lowercase();
    known
        .iter()
        .map(|k| (*k, jaro_winkler(&input, k)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k)
}
