pub mod prompts;
pub mod render;

pub use prompts::{parse_optional_number, prompt_goal, prompt_preference, prompt_profile};
pub use render::{display_food_list, display_nutrition_plan};
