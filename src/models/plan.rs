use serde::{Deserialize, Serialize};

use crate::models::inputs::{FixedCostInputs, ProfitType, SalesMixEntry};

/// Fixed costs for one booth run. `total` is the sum of the four parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedCosts {
    pub rent: f64,
    pub staff: f64,
    pub equipment: f64,
    pub additional_expenses: f64,
    pub total: f64,
}

impl FixedCosts {
    pub fn new(rent: f64, staff: f64, equipment: f64, additional_expenses: f64) -> Self {
        Self {
            rent,
            staff,
            equipment,
            additional_expenses,
            total: rent + staff + equipment + additional_expenses,
        }
    }

    /// Collapse the captured cost lines for a booth running `days` days.
    pub fn from_inputs(inputs: &FixedCostInputs, days: u32) -> Self {
        Self::new(
            inputs.rent,
            inputs.staff.iter().map(|s| s.cost(days)).sum(),
            inputs.equipment.iter().map(|c| c.amount).sum(),
            inputs.additional_expenses.iter().map(|c| c.amount).sum(),
        )
    }
}

/// Ingredient quantity implied by a sales volume.
///
/// `quantity` is already rounded up, and `cost == quantity * cost_per_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    pub ingredient_id: String,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub cost_per_unit: f64,
    pub cost: f64,
}

/// How an iterative figure was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Convergence {
    Converged { iterations: u32 },
    /// Iteration cap reached; the value is the last one computed.
    Approximate { iterations: u32 },
    /// Computed in one shot, no iteration.
    Direct,
}

impl Convergence {
    pub fn is_approximate(&self) -> bool {
        matches!(self, Convergence::Approximate { .. })
    }

    pub fn iterations(&self) -> u32 {
        match self {
            Convergence::Converged { iterations } | Convergence::Approximate { iterations } => {
                *iterations
            }
            Convergence::Direct => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    pub units_needed: u64,
    pub revenue_needed: f64,
    /// `ceil(units_needed / number_of_days)`.
    pub daily_target: u64,
    pub ingredient_cost: f64,
    pub convergence: Convergence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetProfitResult {
    pub profit_type: ProfitType,
    pub profit_value: f64,
    pub units_needed: u64,
    pub revenue_needed: f64,
    pub additional_ingredient_cost: f64,
    pub total_capital_with_profit: f64,
    pub convergence: Convergence,
}

/// One profit ladder level.
///
/// `variable_costs` and `total_capital` are taken at the settled volume, while
/// `total_units` is `ceil(revenue / average_price)`, so it can exceed the volume
/// the variable costs were priced at by a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLadderRow {
    pub profit_percent: u32,
    pub fixed_costs: f64,
    pub variable_costs: f64,
    pub total_capital: f64,
    pub profit: f64,
    pub revenue: f64,
    pub total_units: u64,
    pub units_per_day: u64,
    pub revenue_per_day: f64,
    pub convergence: Convergence,
}

/// Conditions that do not stop a plan but make it worth a second look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    MissingMenuItem {
        menu_item_id: String,
    },
    MissingIngredient {
        menu_item_id: String,
        ingredient_id: String,
    },
    ProportionTotal {
        total: f64,
    },
    NonConvergence {
        solver: String,
        iterations: u32,
    },
}

impl std::fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanWarning::MissingMenuItem { menu_item_id } => {
                write!(f, "menu item '{}' is not in the catalog", menu_item_id)
            }
            PlanWarning::MissingIngredient {
                menu_item_id,
                ingredient_id,
            } => write!(
                f,
                "ingredient '{}' used by '{}' is not in the catalog",
                ingredient_id, menu_item_id
            ),
            PlanWarning::ProportionTotal { total } => {
                write!(f, "sales mix totals {:.1}% instead of 100%", total)
            }
            PlanWarning::NonConvergence { solver, iterations } => write!(
                f,
                "{} did not converge after {} iterations (approximate)",
                solver, iterations
            ),
        }
    }
}

/// A complete, freshly computed business plan. Replaced as a whole, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessPlan {
    pub fixed_costs: FixedCosts,
    pub sales_mix: Vec<SalesMixEntry>,
    pub number_of_days: u32,
    pub average_price: f64,
    pub proportion_total: f64,
    /// Ingredient requirements at the break-even volume.
    pub ingredients: Vec<IngredientRequirement>,
    pub break_even: BreakEvenResult,
    pub target_profit: TargetProfitResult,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_ladder: Option<Vec<ProfitLadderRow>>,

    #[serde(default)]
    pub warnings: Vec<PlanWarning>,
}

impl BusinessPlan {
    pub fn is_approximate(&self) -> bool {
        self.break_even.convergence.is_approximate()
            || self.target_profit.convergence.is_approximate()
            || self
                .profit_ladder
                .iter()
                .flatten()
                .any(|r| r.convergence.is_approximate())
    }
}
