use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An ingredient snapshot from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Unit of measure (e.g. "g", "pcs").
    pub unit: String,

    pub cost_per_unit: f64,
}

/// One ingredient used by a menu item, per unit sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub ingredient_id: String,
    pub quantity_per_unit: f64,
}

/// A menu item snapshot: sale price and its recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRef {
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub price: f64,

    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl MenuItemRef {
    /// Display label, falling back to the id when no name is set.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Read-only catalog snapshot consumed by one calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub menu_items: Vec<MenuItemRef>,
}

impl Catalog {
    pub fn new(ingredients: Vec<Ingredient>, menu_items: Vec<MenuItemRef>) -> Self {
        Self {
            ingredients,
            menu_items,
        }
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItemRef> {
        self.menu_items.iter().find(|m| m.id == id)
    }

    /// Index ingredients by id for repeated lookups inside solver loops.
    pub fn ingredient_index(&self) -> HashMap<&str, &Ingredient> {
        self.ingredients.iter().map(|i| (i.id.as_str(), i)).collect()
    }

    /// Drop duplicate ids, keeping the last occurrence in its original slot order.
    pub fn dedup(&mut self) {
        dedup_last_wins(&mut self.ingredients, |i| i.id.clone());
        dedup_last_wins(&mut self.menu_items, |m| m.id.clone());
    }
}

fn dedup_last_wins<T, F: Fn(&T) -> String>(items: &mut Vec<T>, key: F) {
    let mut last: HashMap<String, usize> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        last.insert(key(item), idx);
    }

    let mut idx = 0;
    items.retain(|item| {
        let keep = last.get(&key(item)) == Some(&idx);
        idx += 1;
        keep
    });
}
