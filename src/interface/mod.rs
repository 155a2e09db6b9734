pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_ladder_csv;
pub use prompts::{
    edit_sales_mix, fuzzy_matches, prompt_menu_item, prompt_proportion, prompt_yes_no,
};
pub use render::{display_ladder, display_margins, display_plan, display_sales_mix};
