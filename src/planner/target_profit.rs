use tracing::{info, warn};

use crate::models::{Convergence, ProfitTarget, TargetProfitResult};
use crate::planner::context::SolveContext;
use crate::planner::fixed_point::solve_fixed_point;

/// Revenue and volume needed to hit a profit target.
///
/// `baseline_capital` is the reserve-buffered capital at break-even. Percentage
/// targets strictly between 0% and 100% are solved iteratively for
/// `revenue = capital(units(revenue)) / (1 - ratio)`; anything else (amount
/// targets, out-of-range percentages) takes the direct one-shot estimate.
pub fn solve_target_profit(
    ctx: &SolveContext<'_>,
    target: &ProfitTarget,
    baseline_capital: f64,
) -> TargetProfitResult {
    let profit_amount = match target.ratio() {
        Some(ratio) => baseline_capital * ratio,
        None => target.value,
    };
    let seed = baseline_capital + profit_amount;

    match target.ratio() {
        Some(ratio) if ratio > 0.0 && ratio < 1.0 => iterate(ctx, target, ratio, seed),
        _ => direct(ctx, target, seed, profit_amount),
    }
}

fn iterate(
    ctx: &SolveContext<'_>,
    target: &ProfitTarget,
    ratio: f64,
    seed: f64,
) -> TargetProfitResult {
    let outcome = solve_fixed_point(
        seed,
        |revenue| ctx.capital_with_reserve(ctx.units_for_revenue(revenue)) / (1.0 - ratio),
        ctx.config.tolerance,
        ctx.config.iteration_cap(),
    );

    if !outcome.converged {
        warn!(
            iterations = outcome.iterations,
            revenue = outcome.value,
            "target profit did not converge, returning approximate value"
        );
    }

    let final_units = ctx.units_for_revenue(outcome.value);
    let final_ingredient_cost = ctx.ingredient_cost(final_units);
    let final_capital = ctx.with_reserve(ctx.fixed_costs.total + final_ingredient_cost);

    info!(
        target = target.value,
        units = final_units,
        capital = final_capital,
        iterations = outcome.iterations,
        "target profit solved"
    );

    TargetProfitResult {
        profit_type: target.profit_type,
        profit_value: target.value,
        units_needed: final_units,
        revenue_needed: final_units as f64 * ctx.average_price,
        additional_ingredient_cost: final_ingredient_cost,
        total_capital_with_profit: final_capital / (1.0 - ratio),
        convergence: outcome.convergence(),
    }
}

/// One-shot estimate with no reserve-on-revenue coupling.
fn direct(
    ctx: &SolveContext<'_>,
    target: &ProfitTarget,
    baseline_revenue: f64,
    profit_amount: f64,
) -> TargetProfitResult {
    let target_units = ctx.units_for_revenue(baseline_revenue);
    let ingredient_cost = ctx.ingredient_cost(target_units);
    let capital = ctx.fixed_costs.total + ingredient_cost;

    info!(
        target = target.value,
        units = target_units,
        capital,
        "target profit estimated directly"
    );

    TargetProfitResult {
        profit_type: target.profit_type,
        profit_value: target.value,
        units_needed: target_units,
        revenue_needed: target_units as f64 * ctx.average_price,
        additional_ingredient_cost: ingredient_cost,
        total_capital_with_profit: capital + profit_amount,
        convergence: Convergence::Direct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, FixedCosts, MenuItemRef, SalesMixEntry};
    use crate::planner::config::SolverConfig;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![],
            vec![
                MenuItemRef {
                    id: "a".to_string(),
                    name: "A".to_string(),
                    price: 100.0,
                    ingredients: vec![],
                },
                MenuItemRef {
                    id: "b".to_string(),
                    name: "B".to_string(),
                    price: 50.0,
                    ingredients: vec![],
                },
            ],
        )
    }

    fn mix() -> Vec<SalesMixEntry> {
        ["a", "b"]
            .iter()
            .map(|id| SalesMixEntry {
                menu_item_id: id.to_string(),
                proportion_percent: 50.0,
            })
            .collect()
    }

    #[test]
    fn test_percentage_target_divides_by_margin_share() {
        let catalog = catalog();
        let mix = mix();
        let config = SolverConfig::default();
        let ctx =
            SolveContext::new(&catalog, &mix, FixedCosts::new(1000.0, 0.0, 0.0, 0.0), 1, &config)
                .unwrap();

        let result = solve_target_profit(&ctx, &ProfitTarget::percentage(20.0), 1100.0);

        // capital stays at 1100 with no ingredient cost, so 1100 / 0.8
        assert!((result.total_capital_with_profit - 1375.0).abs() < 1e-6);
        assert_eq!(result.units_needed, 19);
        assert!((result.revenue_needed - 19.0 * 75.0).abs() < 1e-6);
        assert!(matches!(result.convergence, Convergence::Converged { .. }));
    }

    #[test]
    fn test_amount_target_uses_direct_path() {
        let catalog = catalog();
        let mix = mix();
        let config = SolverConfig::default();
        let ctx =
            SolveContext::new(&catalog, &mix, FixedCosts::new(1000.0, 0.0, 0.0, 0.0), 1, &config)
                .unwrap();

        let result = solve_target_profit(&ctx, &ProfitTarget::amount(400.0), 1100.0);

        assert_eq!(result.convergence, Convergence::Direct);
        // ceil(1500 / 75)
        assert_eq!(result.units_needed, 20);
        assert!((result.revenue_needed - 1500.0).abs() < 1e-6);
        assert!((result.total_capital_with_profit - 1400.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_percentage_falls_back() {
        let catalog = catalog();
        let mix = mix();
        let config = SolverConfig::default();
        let ctx =
            SolveContext::new(&catalog, &mix, FixedCosts::new(1000.0, 0.0, 0.0, 0.0), 1, &config)
                .unwrap();

        for pct in [0.0, 100.0, 150.0] {
            let result = solve_target_profit(&ctx, &ProfitTarget::percentage(pct), 1100.0);
            assert_eq!(result.convergence, Convergence::Direct, "pct {}", pct);
            assert!(result.total_capital_with_profit.is_finite());
        }
    }
}
