use std::collections::HashMap;

use crate::models::{Catalog, Ingredient, MenuItemRef};

/// Per-unit ingredient costs and menu item margins over a catalog snapshot.
#[derive(Debug, Clone)]
pub struct CostModel<'a> {
    ingredients: HashMap<&'a str, &'a Ingredient>,
}

impl<'a> CostModel<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            ingredients: catalog.ingredient_index(),
        }
    }

    pub fn ingredient(&self, id: &str) -> Option<&'a Ingredient> {
        self.ingredients.get(id).copied()
    }

    /// Cost of `quantity` units of an ingredient.
    ///
    /// Unknown ingredients cost 0 so a single missing entry does not abort a plan.
    pub fn ingredient_cost(&self, ingredient_id: &str, quantity: f64) -> f64 {
        self.ingredient(ingredient_id)
            .map(|i| i.cost_per_unit * quantity)
            .unwrap_or(0.0)
    }

    /// Sale price minus the ingredient cost of one unit.
    pub fn menu_item_margin(&self, item: &MenuItemRef) -> f64 {
        let unit_cost: f64 = item
            .ingredients
            .iter()
            .map(|line| self.ingredient_cost(&line.ingredient_id, line.quantity_per_unit))
            .sum();
        item.price - unit_cost
    }
}

/// Unweighted mean price of the selected menu items (0 when none are selected).
///
/// Deliberately ignores the sales-mix proportions.
pub fn average_price(selected: &[&MenuItemRef]) -> f64 {
    if selected.is_empty() {
        return 0.0;
    }
    selected.iter().map(|m| m.price).sum::<f64>() / selected.len() as f64
}
