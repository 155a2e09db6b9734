pub mod break_even;
pub mod config;
pub mod constants;
pub mod context;
pub mod cost;
pub mod fixed_point;
pub mod ladder;
pub mod projection;
pub mod target_profit;

pub use break_even::solve_break_even;
pub use config::SolverConfig;
pub use constants::*;
pub use context::SolveContext;
pub use cost::{average_price, CostModel};
pub use fixed_point::{solve_fixed_point, FixedPoint};
pub use ladder::generate_ladder;
pub use projection::IngredientProjector;
pub use target_profit::solve_target_profit;

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{BusinessPlan, FixedCosts, PlanInputs, PlanWarning};

/// Compute a complete business plan from scratch.
///
/// Pure: the same inputs always give the same plan. Callers invoke this whenever
/// they decide any input changed and replace their previous plan with the result.
pub fn recompute(inputs: &PlanInputs) -> Result<BusinessPlan> {
    compute(inputs, false)
}

/// [`recompute`], plus the profit ladder over `settings.ladder_percentages`.
pub fn recompute_with_ladder(inputs: &PlanInputs) -> Result<BusinessPlan> {
    compute(inputs, true)
}

fn compute(inputs: &PlanInputs, with_ladder: bool) -> Result<BusinessPlan> {
    let fixed_costs = FixedCosts::from_inputs(&inputs.fixed_costs, inputs.number_of_days);
    let ctx = SolveContext::new(
        &inputs.catalog,
        &inputs.sales_mix,
        fixed_costs,
        inputs.number_of_days,
        &inputs.settings,
    )?;

    info!(
        menu_items = inputs.sales_mix.len(),
        fixed_total = fixed_costs.total,
        average_price = ctx.average_price,
        days = inputs.number_of_days,
        "recomputing business plan"
    );

    let mut warnings = ctx.projector.missing_references(&inputs.sales_mix);
    for warning in &warnings {
        warn!(%warning, "catalog reference skipped");
    }

    let proportion_total = inputs.proportion_total();
    if (proportion_total - PROPORTION_TARGET).abs() > PROPORTION_EPSILON {
        warnings.push(PlanWarning::ProportionTotal {
            total: proportion_total,
        });
    }

    let break_even = solve_break_even(&ctx);
    let ingredients = ctx
        .projector
        .project(break_even.units_needed, &inputs.sales_mix);
    let target_profit = solve_target_profit(&ctx, &inputs.target, break_even.revenue_needed);

    let profit_ladder = if with_ladder {
        Some(generate_ladder(&ctx, &inputs.settings.ladder_percentages)?)
    } else {
        None
    };

    if break_even.convergence.is_approximate() {
        warnings.push(PlanWarning::NonConvergence {
            solver: "break-even".to_string(),
            iterations: break_even.convergence.iterations(),
        });
    }
    if target_profit.convergence.is_approximate() {
        warnings.push(PlanWarning::NonConvergence {
            solver: "target profit".to_string(),
            iterations: target_profit.convergence.iterations(),
        });
    }
    for row in profit_ladder.iter().flatten() {
        if row.convergence.is_approximate() {
            warnings.push(PlanWarning::NonConvergence {
                solver: format!("profit ladder {}%", row.profit_percent),
                iterations: row.convergence.iterations(),
            });
        }
    }

    Ok(BusinessPlan {
        fixed_costs,
        sales_mix: inputs.sales_mix.clone(),
        number_of_days: inputs.number_of_days,
        average_price: ctx.average_price,
        proportion_total,
        ingredients,
        break_even,
        target_profit,
        profit_ladder,
        warnings,
    })
}
