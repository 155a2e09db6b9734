use tracing::{debug, warn};

use crate::error::{PlanError, Result};
use crate::models::ProfitLadderRow;
use crate::planner::context::SolveContext;
use crate::planner::fixed_point::solve_fixed_point;

/// One comparison row per profit percentage.
///
/// Rows are solved independently; percentages must lie in `0..100`.
pub fn generate_ladder(
    ctx: &SolveContext<'_>,
    profit_percentages: &[u32],
) -> Result<Vec<ProfitLadderRow>> {
    profit_percentages
        .iter()
        .map(|&percent| ladder_row(ctx, percent))
        .collect()
}

/// Iterate on reserve-buffered capital until it moves by less than the ladder tolerance.
fn ladder_row(ctx: &SolveContext<'_>, profit_percent: u32) -> Result<ProfitLadderRow> {
    if profit_percent >= 100 {
        return Err(PlanError::InvalidInput(format!(
            "profit ladder percentage must be below 100, got {}",
            profit_percent
        )));
    }

    let ratio = f64::from(profit_percent) / 100.0;
    let revenue_for = |capital: f64| capital / (1.0 - ratio);

    let outcome = solve_fixed_point(
        ctx.with_reserve(ctx.fixed_costs.total),
        |capital| ctx.capital_with_reserve(ctx.units_for_revenue(revenue_for(capital))),
        ctx.config.ladder_tolerance,
        ctx.config.iteration_cap(),
    );

    if !outcome.converged {
        warn!(
            profit_percent,
            iterations = outcome.iterations,
            "profit ladder row did not converge"
        );
    }

    let settled_units = ctx.units_for_revenue(revenue_for(outcome.value));
    let variable_costs = ctx.ingredient_cost(settled_units);
    let total_capital = ctx.with_reserve(ctx.fixed_costs.total + variable_costs);
    let revenue = revenue_for(total_capital);
    let total_units = ctx.units_for_revenue(revenue);
    let days = f64::from(ctx.number_of_days);

    debug!(profit_percent, revenue, total_units, "profit ladder row");

    Ok(ProfitLadderRow {
        profit_percent,
        fixed_costs: ctx.fixed_costs.total,
        variable_costs,
        total_capital,
        profit: revenue - total_capital,
        revenue,
        total_units,
        units_per_day: ctx.per_day(total_units),
        revenue_per_day: revenue / days,
        convergence: outcome.convergence(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Catalog, FixedCosts, Ingredient, IngredientLine, MenuItemRef, SalesMixEntry,
    };
    use crate::planner::config::SolverConfig;
    use crate::planner::constants::DEFAULT_LADDER_PERCENTAGES;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Ingredient {
                id: "tea".to_string(),
                name: "Tea leaves".to_string(),
                unit: "g".to_string(),
                cost_per_unit: 0.5,
            }],
            vec![MenuItemRef {
                id: "milk_tea".to_string(),
                name: "Milk tea".to_string(),
                price: 45.0,
                ingredients: vec![IngredientLine {
                    ingredient_id: "tea".to_string(),
                    quantity_per_unit: 12.0,
                }],
            }],
        )
    }

    fn mix() -> Vec<SalesMixEntry> {
        vec![SalesMixEntry {
            menu_item_id: "milk_tea".to_string(),
            proportion_percent: 100.0,
        }]
    }

    #[test]
    fn test_default_ladder_is_monotonic() {
        let catalog = catalog();
        let mix = mix();
        let config = SolverConfig::default();
        let fixed = FixedCosts::new(2000.0, 600.0, 300.0, 100.0);
        let ctx = SolveContext::new(&catalog, &mix, fixed, 2, &config).unwrap();

        let rows = generate_ladder(&ctx, &DEFAULT_LADDER_PERCENTAGES).unwrap();
        assert_eq!(rows.len(), 7);

        for pair in rows.windows(2) {
            assert!(pair[0].revenue <= pair[1].revenue);
            assert!(pair[0].total_capital <= pair[1].total_capital);
        }
    }

    #[test]
    fn test_row_fields_are_consistent() {
        let catalog = catalog();
        let mix = mix();
        let config = SolverConfig::default();
        let fixed = FixedCosts::new(1000.0, 0.0, 0.0, 0.0);
        let ctx = SolveContext::new(&catalog, &mix, fixed, 4, &config).unwrap();

        let rows = generate_ladder(&ctx, &[30]).unwrap();
        let row = &rows[0];

        assert!((row.fixed_costs - 1000.0).abs() < 1e-9);
        assert!((row.total_capital - (row.fixed_costs + row.variable_costs) * 1.1).abs() < 1e-6);
        assert!((row.revenue * 0.7 - row.total_capital).abs() < 1e-6);
        assert!((row.profit - (row.revenue - row.total_capital)).abs() < 1e-9);
        assert_eq!(row.units_per_day, row.total_units.div_ceil(4));
        assert!((row.revenue_per_day * 4.0 - row.revenue).abs() < 1e-6);
    }

    #[test]
    fn test_total_units_cover_priced_volume() {
        let catalog = catalog();
        let mix = mix();
        let config = SolverConfig::default();
        let fixed = FixedCosts::new(2000.0, 600.0, 300.0, 100.0);
        let ctx = SolveContext::new(&catalog, &mix, fixed, 1, &config).unwrap();

        for row in generate_ladder(&ctx, &DEFAULT_LADDER_PERCENTAGES).unwrap() {
            assert_eq!(row.total_units, ctx.units_for_revenue(row.revenue));
            assert!(ctx.ingredient_cost(row.total_units) >= row.variable_costs);
        }
    }

    #[test]
    fn test_percentage_of_100_is_rejected() {
        let catalog = catalog();
        let mix = mix();
        let config = SolverConfig::default();
        let ctx = SolveContext::new(&catalog, &mix, FixedCosts::default(), 1, &config).unwrap();

        assert!(matches!(
            generate_ladder(&ctx, &[10, 100]),
            Err(PlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_percent_row_has_no_profit() {
        let catalog = catalog();
        let mix = mix();
        let config = SolverConfig::default();
        let fixed = FixedCosts::new(900.0, 0.0, 0.0, 0.0);
        let ctx = SolveContext::new(&catalog, &mix, fixed, 1, &config).unwrap();

        let rows = generate_ladder(&ctx, &[0]).unwrap();
        assert!(rows[0].profit.abs() < 1e-9);
    }
}
