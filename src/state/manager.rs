use crate::error::{PlanError, Result};
use crate::models::{MenuItemRef, PlanInputs, SalesMixEntry};
use crate::planner::constants::PROPORTION_TARGET;
use crate::planner::CostModel;

/// Edits the menu selection and sales mix of a booth before it is recomputed.
pub struct BoothStateManager {
    inputs: PlanInputs,
}

impl BoothStateManager {
    pub fn new(inputs: PlanInputs) -> Self {
        Self { inputs }
    }

    pub fn inputs(&self) -> &PlanInputs {
        &self.inputs
    }

    /// Find a menu item by id, then by name (case-insensitive).
    pub fn find_menu_item(&self, key: &str) -> Option<&MenuItemRef> {
        let menu_items = &self.inputs.catalog.menu_items;
        menu_items.iter().find(|m| m.id == key).or_else(|| {
            let lowered = key.to_lowercase();
            menu_items.iter().find(|m| m.name.to_lowercase() == lowered)
        })
    }

    pub fn is_selected(&self, menu_item_id: &str) -> bool {
        self.inputs
            .sales_mix
            .iter()
            .any(|e| e.menu_item_id == menu_item_id)
    }

    /// Add a menu item to the mix with a 0% proportion. Selecting twice is a no-op.
    pub fn select(&mut self, menu_item_id: &str) -> Result<()> {
        if self.inputs.catalog.menu_item(menu_item_id).is_none() {
            return Err(PlanError::MenuItemNotFound(menu_item_id.to_string()));
        }

        if !self.is_selected(menu_item_id) {
            self.inputs.sales_mix.push(SalesMixEntry {
                menu_item_id: menu_item_id.to_string(),
                proportion_percent: 0.0,
            });
        }
        Ok(())
    }

    /// Remove a menu item from the mix. Returns whether it was selected.
    pub fn deselect(&mut self, menu_item_id: &str) -> bool {
        let before = self.inputs.sales_mix.len();
        self.inputs
            .sales_mix
            .retain(|e| e.menu_item_id != menu_item_id);
        self.inputs.sales_mix.len() != before
    }

    pub fn set_proportion(&mut self, menu_item_id: &str, percent: f64) -> Result<()> {
        if !(percent >= 0.0 && percent.is_finite()) {
            return Err(PlanError::InvalidInput(format!(
                "proportion must be a non-negative number, got {}",
                percent
            )));
        }

        let entry = self
            .inputs
            .sales_mix
            .iter_mut()
            .find(|e| e.menu_item_id == menu_item_id)
            .ok_or_else(|| PlanError::MenuItemNotFound(menu_item_id.to_string()))?;

        entry.proportion_percent = percent;
        Ok(())
    }

    /// Give every selected item an equal share; the last one absorbs rounding.
    pub fn split_evenly(&mut self) {
        let count = self.inputs.sales_mix.len();
        if count == 0 {
            return;
        }

        let share = (PROPORTION_TARGET / count as f64 * 100.0).floor() / 100.0;
        let mut assigned = 0.0;
        for (idx, entry) in self.inputs.sales_mix.iter_mut().enumerate() {
            if idx + 1 == count {
                entry.proportion_percent = PROPORTION_TARGET - assigned;
            } else {
                entry.proportion_percent = share;
                assigned += share;
            }
        }
    }

    pub fn proportion_total(&self) -> f64 {
        self.inputs.proportion_total()
    }

    /// Selected menu items in mix order. Unknown ids are skipped.
    pub fn selected_items(&self) -> Vec<&MenuItemRef> {
        self.inputs
            .sales_mix
            .iter()
            .filter_map(|e| self.inputs.catalog.menu_item(&e.menu_item_id))
            .collect()
    }

    pub fn unselected_items(&self) -> Vec<&MenuItemRef> {
        self.inputs
            .catalog
            .menu_items
            .iter()
            .filter(|m| !self.is_selected(&m.id))
            .collect()
    }

    /// Per-unit margin of every catalog menu item.
    pub fn margins(&self) -> Vec<(&MenuItemRef, f64)> {
        let costs = CostModel::new(&self.inputs.catalog);
        self.inputs
            .catalog
            .menu_items
            .iter()
            .map(|m| (m, costs.menu_item_margin(m)))
            .collect()
    }
}
