use tracing::{info, warn};

use crate::models::BreakEvenResult;
use crate::planner::context::SolveContext;
use crate::planner::fixed_point::solve_fixed_point;

/// Smallest revenue that covers the capital needed to produce the volume it implies.
///
/// Seeds with the fixed-cost total and iterates `revenue = capital(units(revenue))`.
/// The returned triple is recomputed once from the settled revenue, so
/// `revenue_needed` is exactly the reserve-buffered capital at `units_needed`.
pub fn solve_break_even(ctx: &SolveContext<'_>) -> BreakEvenResult {
    let outcome = solve_fixed_point(
        ctx.fixed_costs.total,
        |revenue| ctx.capital_with_reserve(ctx.units_for_revenue(revenue)),
        ctx.config.tolerance,
        ctx.config.iteration_cap(),
    );

    if !outcome.converged {
        warn!(
            iterations = outcome.iterations,
            revenue = outcome.value,
            "break-even did not converge, returning approximate value"
        );
    }

    let units_needed = ctx.units_for_revenue(outcome.value);
    let ingredient_cost = ctx.ingredient_cost(units_needed);
    let total_capital = ctx.with_reserve(ctx.fixed_costs.total + ingredient_cost);

    info!(
        units = units_needed,
        revenue = total_capital,
        iterations = outcome.iterations,
        "break-even solved"
    );

    BreakEvenResult {
        units_needed,
        revenue_needed: total_capital,
        daily_target: ctx.per_day(units_needed),
        ingredient_cost,
        convergence: outcome.convergence(),
    }
}
