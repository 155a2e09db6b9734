use booth_plan_rs::models::{
    Catalog, FixedCosts, Ingredient, IngredientLine, MenuItemRef, ProfitTarget, SalesMixEntry,
};
use booth_plan_rs::planner::{
    generate_ladder, solve_break_even, solve_target_profit, IngredientProjector, SolveContext,
    SolverConfig, DEFAULT_LADDER_PERCENTAGES, MAX_ITERATIONS,
};
use booth_plan_rs::PlanError;

fn ingredient(id: &str, unit: &str, cost: f64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: id.to_string(),
        unit: unit.to_string(),
        cost_per_unit: cost,
    }
}

fn menu_item(id: &str, price: f64, lines: &[(&str, f64)]) -> MenuItemRef {
    MenuItemRef {
        id: id.to_string(),
        name: id.to_string(),
        price,
        ingredients: lines
            .iter()
            .map(|(ing, qty)| IngredientLine {
                ingredient_id: ing.to_string(),
                quantity_per_unit: *qty,
            })
            .collect(),
    }
}

fn mix(entries: &[(&str, f64)]) -> Vec<SalesMixEntry> {
    entries
        .iter()
        .map(|(id, pct)| SalesMixEntry {
            menu_item_id: id.to_string(),
            proportion_percent: *pct,
        })
        .collect()
}

/// A crepe booth with shared ingredients and fractional recipes.
fn crepe_catalog() -> Catalog {
    Catalog::new(
        vec![
            ingredient("batter", "ml", 0.03),
            ingredient("banana", "pcs", 5.0),
            ingredient("chocolate", "g", 0.12),
            ingredient("ham", "g", 0.25),
            ingredient("cheese", "g", 0.2),
        ],
        vec![
            menu_item(
                "choco_banana",
                55.0,
                &[("batter", 120.0), ("banana", 0.5), ("chocolate", 25.0)],
            ),
            menu_item(
                "ham_cheese",
                65.0,
                &[("batter", 120.0), ("ham", 40.0), ("cheese", 30.0)],
            ),
            menu_item("plain", 35.0, &[("batter", 120.0)]),
        ],
    )
}

fn crepe_mix() -> Vec<SalesMixEntry> {
    mix(&[("choco_banana", 45.0), ("ham_cheese", 35.0), ("plain", 20.0)])
}

fn crepe_fixed() -> FixedCosts {
    FixedCosts::new(3000.0, 1800.0, 450.0, 250.0)
}

#[test]
fn test_solvers_are_idempotent() {
    let catalog = crepe_catalog();
    let sales_mix = crepe_mix();
    let config = SolverConfig::default();
    let ctx = SolveContext::new(&catalog, &sales_mix, crepe_fixed(), 3, &config).unwrap();

    let first = solve_break_even(&ctx);
    let second = solve_break_even(&ctx);
    assert_eq!(first, second);
    assert_eq!(
        first.revenue_needed.to_bits(),
        second.revenue_needed.to_bits()
    );

    let target = ProfitTarget::percentage(25.0);
    assert_eq!(
        solve_target_profit(&ctx, &target, first.revenue_needed),
        solve_target_profit(&ctx, &target, first.revenue_needed)
    );

    assert_eq!(
        generate_ladder(&ctx, &DEFAULT_LADDER_PERCENTAGES).unwrap(),
        generate_ladder(&ctx, &DEFAULT_LADDER_PERCENTAGES).unwrap()
    );
}

#[test]
fn test_iterations_never_exceed_cap() {
    let catalog = crepe_catalog();
    let sales_mix = crepe_mix();
    // An impossible tolerance forces every solver to run to the cap
    let config = SolverConfig {
        tolerance: 0.0,
        ladder_tolerance: 0.0,
        max_iterations: 1000,
        ..Default::default()
    };
    let ctx = SolveContext::new(&catalog, &sales_mix, crepe_fixed(), 1, &config).unwrap();

    let be = solve_break_even(&ctx);
    assert!(be.convergence.iterations() <= MAX_ITERATIONS);

    let tp = solve_target_profit(&ctx, &ProfitTarget::percentage(30.0), be.revenue_needed);
    assert!(tp.convergence.iterations() <= MAX_ITERATIONS);

    for row in generate_ladder(&ctx, &DEFAULT_LADDER_PERCENTAGES).unwrap() {
        assert!(row.convergence.iterations() <= MAX_ITERATIONS);
    }
}

#[test]
fn test_requirement_cost_uses_rounded_quantity() {
    let catalog = crepe_catalog();
    let projector = IngredientProjector::new(&catalog);

    for units in [0, 1, 7, 33, 101, 999] {
        for row in projector.project(units, &crepe_mix()) {
            assert_eq!(row.quantity, row.quantity.ceil());
            assert_eq!(row.cost, row.quantity * row.cost_per_unit);
        }
    }
}

#[test]
fn test_break_even_fixed_point() {
    let catalog = crepe_catalog();
    let sales_mix = crepe_mix();
    let config = SolverConfig::default();
    let ctx = SolveContext::new(&catalog, &sales_mix, crepe_fixed(), 2, &config).unwrap();

    let result = solve_break_even(&ctx);

    let projector = IngredientProjector::new(&catalog);
    let ingredient_cost: f64 = projector
        .project(result.units_needed, &sales_mix)
        .iter()
        .map(|r| r.cost)
        .sum();
    let total_capital = (crepe_fixed().total + ingredient_cost) * 1.10;

    assert!((total_capital - result.revenue_needed).abs() < config.tolerance);
    assert!((ingredient_cost - result.ingredient_cost).abs() < 1e-6);
}

#[test]
fn test_ladder_revenue_is_monotonic() {
    let catalog = crepe_catalog();
    let sales_mix = crepe_mix();
    let config = SolverConfig::default();
    let ctx = SolveContext::new(&catalog, &sales_mix, crepe_fixed(), 2, &config).unwrap();

    let rows = generate_ladder(&ctx, &[5, 10, 20, 30, 40, 50, 60, 70]).unwrap();
    for pair in rows.windows(2) {
        assert!(
            pair[0].revenue <= pair[1].revenue,
            "{}% revenue {} > {}% revenue {}",
            pair[0].profit_percent,
            pair[0].revenue,
            pair[1].profit_percent,
            pair[1].revenue
        );
        assert!(pair[0].total_capital <= pair[1].total_capital);
    }
}

#[test]
fn test_ladder_rows_are_independent() {
    let catalog = crepe_catalog();
    let sales_mix = crepe_mix();
    let config = SolverConfig::default();
    let ctx = SolveContext::new(&catalog, &sales_mix, crepe_fixed(), 2, &config).unwrap();

    let full = generate_ladder(&ctx, &DEFAULT_LADDER_PERCENTAGES).unwrap();
    let single = generate_ladder(&ctx, &[40]).unwrap();
    let from_full = full.iter().find(|r| r.profit_percent == 40).unwrap();
    assert_eq!(from_full, &single[0]);
}

#[test]
fn test_zero_average_price_is_degenerate() {
    let catalog = Catalog::new(vec![], vec![menu_item("free", 0.0, &[])]);
    let sales_mix = mix(&[("free", 100.0)]);
    let config = SolverConfig::default();

    let result = SolveContext::new(&catalog, &sales_mix, crepe_fixed(), 1, &config);
    assert!(matches!(result, Err(PlanError::DegenerateInput(_))));
}

#[test]
fn test_unresolvable_selection_is_degenerate() {
    let catalog = crepe_catalog();
    let sales_mix = mix(&[("ghost", 100.0)]);
    let config = SolverConfig::default();

    let result = SolveContext::new(&catalog, &sales_mix, crepe_fixed(), 1, &config);
    assert!(matches!(result, Err(PlanError::DegenerateInput(_))));
}
