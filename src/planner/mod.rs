pub mod assembler;
pub mod composer;
pub mod constants;
pub mod roles;
pub mod selection;

pub use assembler::{
    AssemblyContext, assemble_meal, gram_ratio, portion_multiplier, role_multiplier,
    round_one_decimal,
};
pub use composer::{
    compose_plan, create_nutrition_plan, create_nutrition_plan_at, generate_plan, macro_summary,
};
pub use roles::{
    FoodRole, classify, is_carb_role, is_fat_role, is_fruit_role, is_protein_role,
    is_vegetable_role,
};
pub use selection::{Refinement, RoleRequest, Selection, Tier, select_foods, slot_plan};
