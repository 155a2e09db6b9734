pub mod catalog;
pub mod inputs;
pub mod plan;

pub use catalog::{Catalog, Ingredient, IngredientLine, MenuItemRef};
pub use inputs::{
    CostLine, FixedCostInputs, PlanInputs, ProfitTarget, ProfitType, SalesMixEntry, StaffLine,
};
pub use plan::{
    BreakEvenResult, BusinessPlan, Convergence, FixedCosts, IngredientRequirement, PlanWarning,
    ProfitLadderRow, TargetProfitResult,
};
