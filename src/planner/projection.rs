use std::collections::HashMap;

use crate::models::{
    Catalog, Ingredient, IngredientRequirement, MenuItemRef, PlanWarning, SalesMixEntry,
};
use crate::planner::cost::CostModel;

/// Turns a unit volume and a sales mix into ingredient requirements.
///
/// Called inside every solver iteration, so lookups are indexed once up front.
#[derive(Debug, Clone)]
pub struct IngredientProjector<'a> {
    costs: CostModel<'a>,
    menu_items: HashMap<&'a str, &'a MenuItemRef>,
}

impl<'a> IngredientProjector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            costs: CostModel::new(catalog),
            menu_items: catalog
                .menu_items
                .iter()
                .map(|m| (m.id.as_str(), m))
                .collect(),
        }
    }

    pub fn menu_item(&self, id: &str) -> Option<&'a MenuItemRef> {
        self.menu_items.get(id).copied()
    }

    /// Raw (unrounded) quantity per ingredient, in first-seen order.
    ///
    /// Items sharing an ingredient add up. Unknown menu items and unknown
    /// ingredients are skipped.
    fn accumulate(
        &self,
        total_units: u64,
        sales_mix: &[SalesMixEntry],
    ) -> Vec<(&'a Ingredient, f64)> {
        let mut totals: Vec<(&'a Ingredient, f64)> = Vec::new();
        let mut slots: HashMap<&'a str, usize> = HashMap::new();

        for entry in sales_mix {
            let Some(item) = self.menu_item(&entry.menu_item_id) else {
                continue;
            };
            let units_for_item = total_units as f64 * (entry.proportion_percent / 100.0);

            for line in &item.ingredients {
                let Some(ingredient) = self.costs.ingredient(&line.ingredient_id) else {
                    continue;
                };
                let quantity = line.quantity_per_unit * units_for_item;

                match slots.get(ingredient.id.as_str()) {
                    Some(&idx) => totals[idx].1 += quantity,
                    None => {
                        slots.insert(ingredient.id.as_str(), totals.len());
                        totals.push((ingredient, quantity));
                    }
                }
            }
        }

        totals
    }

    /// Ingredient requirements for `total_units` sold under `sales_mix`.
    ///
    /// Quantities are rounded up and cost is taken from the rounded quantity.
    pub fn project(
        &self,
        total_units: u64,
        sales_mix: &[SalesMixEntry],
    ) -> Vec<IngredientRequirement> {
        self.accumulate(total_units, sales_mix)
            .into_iter()
            .map(|(ingredient, raw)| {
                let quantity = raw.ceil();
                IngredientRequirement {
                    ingredient_id: ingredient.id.clone(),
                    name: ingredient.name.clone(),
                    unit: ingredient.unit.clone(),
                    quantity,
                    cost_per_unit: ingredient.cost_per_unit,
                    cost: quantity * ingredient.cost_per_unit,
                }
            })
            .collect()
    }

    /// Sum of `project(..).cost` without building the requirement rows.
    pub fn total_cost(&self, total_units: u64, sales_mix: &[SalesMixEntry]) -> f64 {
        self.accumulate(total_units, sales_mix)
            .into_iter()
            .map(|(ingredient, raw)| raw.ceil() * ingredient.cost_per_unit)
            .sum()
    }

    /// Catalog references in the mix that resolve to nothing.
    pub fn missing_references(&self, sales_mix: &[SalesMixEntry]) -> Vec<PlanWarning> {
        let mut warnings = Vec::new();

        for entry in sales_mix {
            let Some(item) = self.menu_item(&entry.menu_item_id) else {
                warnings.push(PlanWarning::MissingMenuItem {
                    menu_item_id: entry.menu_item_id.clone(),
                });
                continue;
            };

            for line in &item.ingredients {
                if self.costs.ingredient(&line.ingredient_id).is_none() {
                    warnings.push(PlanWarning::MissingIngredient {
                        menu_item_id: item.id.clone(),
                        ingredient_id: line.ingredient_id.clone(),
                    });
                }
            }
        }

        warnings
    }
}
