use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{Catalog, FixedCosts, MenuItemRef, SalesMixEntry};
use crate::planner::config::SolverConfig;
use crate::planner::cost::average_price;
use crate::planner::projection::IngredientProjector;

/// Immutable inputs shared by every solver for one plan calculation.
#[derive(Debug, Clone)]
pub struct SolveContext<'a> {
    pub projector: IngredientProjector<'a>,
    pub sales_mix: &'a [SalesMixEntry],
    pub fixed_costs: FixedCosts,
    pub average_price: f64,
    pub number_of_days: u32,
    pub config: &'a SolverConfig,
}

impl<'a> SolveContext<'a> {
    /// Resolve the selected menu items and guard against inputs no solver can use.
    ///
    /// Fails with [`PlanError::DegenerateInput`] when nothing is selected or the
    /// average price is not positive.
    pub fn new(
        catalog: &'a Catalog,
        sales_mix: &'a [SalesMixEntry],
        fixed_costs: FixedCosts,
        number_of_days: u32,
        config: &'a SolverConfig,
    ) -> Result<Self> {
        if number_of_days == 0 {
            return Err(PlanError::InvalidInput(
                "number of days must be at least 1".to_string(),
            ));
        }

        let projector = IngredientProjector::new(catalog);
        let selected: Vec<&MenuItemRef> = sales_mix
            .iter()
            .filter_map(|e| projector.menu_item(&e.menu_item_id))
            .collect();

        if selected.is_empty() {
            return Err(PlanError::DegenerateInput(
                "no menu items selected".to_string(),
            ));
        }

        let average_price = average_price(&selected);
        if !(average_price > 0.0 && average_price.is_finite()) {
            return Err(PlanError::DegenerateInput(format!(
                "average price must be positive, got {}",
                average_price
            )));
        }

        debug!(
            selected = selected.len(),
            average_price,
            fixed_total = fixed_costs.total,
            "solve context ready"
        );

        Ok(Self {
            projector,
            sales_mix,
            fixed_costs,
            average_price,
            number_of_days,
            config,
        })
    }

    /// Whole units needed to bring in `revenue` at the average price.
    pub fn units_for_revenue(&self, revenue: f64) -> u64 {
        (revenue / self.average_price).ceil().max(0.0) as u64
    }

    pub fn ingredient_cost(&self, units: u64) -> f64 {
        self.projector.total_cost(units, self.sales_mix)
    }

    pub fn with_reserve(&self, base_capital: f64) -> f64 {
        base_capital * (1.0 + self.config.reserve_rate)
    }

    /// Fixed + ingredient cost at `units`, plus the reserve fund.
    pub fn capital_with_reserve(&self, units: u64) -> f64 {
        self.with_reserve(self.fixed_costs.total + self.ingredient_cost(units))
    }

    pub fn per_day(&self, units: u64) -> u64 {
        units.div_ceil(u64::from(self.number_of_days))
    }
}
