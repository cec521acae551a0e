use dialoguer::{Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{DietaryPreference, Goal, NutritionProfile};

/// Prompt for an optional positive number; an empty answer means "not set".
fn prompt_optional_number(prompt: &str) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    parse_optional_number(&input)
}

/// Parse an optional non-negative number typed by the user.
pub fn parse_optional_number(input: &str) -> Result<Option<f64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let value: f64 = input
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number", input)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "'{}' must be a non-negative number",
            input
        )));
    }

    Ok(Some(value))
}

/// Prompt for the user's goal.
pub fn prompt_goal() -> Result<Goal> {
    let options = ["Perder peso (lose-weight)", "Mantener (maintain)", "Ganar músculo (gain-muscle)"];
    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(Goal::from(Goal::KNOWN[selection]))
}

/// Prompt for the dietary preference.
pub fn prompt_preference() -> Result<DietaryPreference> {
    let selection = Select::new()
        .with_prompt("Dietary preference")
        .items(&DietaryPreference::KNOWN)
        .default(2)
        .interact()?;

    Ok(DietaryPreference::from(DietaryPreference::KNOWN[selection]))
}

/// Collect a complete profile interactively.
pub fn prompt_profile() -> Result<NutritionProfile> {
    let user_id: String = Input::new()
        .with_prompt("User id")
        .default("local-user".to_string())
        .interact_text()?;

    let goal = prompt_goal()?;
    let dietary_preference = prompt_preference()?;

    Ok(NutritionProfile {
        user_id,
        goal,
        dietary_preference,
        daily_calorie_target: prompt_optional_number("Daily calorie target (kcal, empty for 2000)")?,
        daily_protein_target: prompt_optional_number("Daily protein target (g)")?,
        daily_carb_target: prompt_optional_number("Daily carbohydrate target (g)")?,
        daily_fat_target: prompt_optional_number("Daily fat target (g)")?,
    })
}
