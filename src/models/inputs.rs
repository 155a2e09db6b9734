use serde::{Deserialize, Serialize};

use crate::models::catalog::Catalog;
use crate::planner::SolverConfig;

/// Share of total unit volume attributed to one selected menu item.
///
/// `proportion_percent` is in percent units and taken as stored: entries are never
/// clamped or renormalized, so a mix that does not total 100 skews the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesMixEntry {
    pub menu_item_id: String,
    pub proportion_percent: f64,
}

/// Staff cost line: `daily_wage * headcount` per booth day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffLine {
    pub role: String,
    pub daily_wage: f64,

    #[serde(default = "default_headcount")]
    pub headcount: u32,
}

fn default_headcount() -> u32 {
    1
}

impl StaffLine {
    pub fn cost(&self, days: u32) -> f64 {
        self.daily_wage * f64::from(self.headcount) * f64::from(days)
    }
}

/// A named one-off cost (equipment rental, permits, signage...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub name: String,
    pub amount: f64,
}

/// Raw fixed-cost inputs as captured for a booth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedCostInputs {
    #[serde(default)]
    pub rent: f64,

    #[serde(default)]
    pub staff: Vec<StaffLine>,

    #[serde(default)]
    pub equipment: Vec<CostLine>,

    #[serde(default)]
    pub additional_expenses: Vec<CostLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitType {
    /// `value` is a percent (20 = 20%).
    Percentage,
    /// `value` is a currency amount.
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitTarget {
    pub profit_type: ProfitType,
    pub value: f64,
}

impl Default for ProfitTarget {
    fn default() -> Self {
        Self {
            profit_type: ProfitType::Percentage,
            value: 20.0,
        }
    }
}

impl ProfitTarget {
    pub fn percentage(value: f64) -> Self {
        Self {
            profit_type: ProfitType::Percentage,
            value,
        }
    }

    pub fn amount(value: f64) -> Self {
        Self {
            profit_type: ProfitType::Amount,
            value,
        }
    }

    /// Target as a decimal ratio, only for percentage targets.
    pub fn ratio(&self) -> Option<f64> {
        match self.profit_type {
            ProfitType::Percentage => Some(self.value / 100.0),
            ProfitType::Amount => None,
        }
    }
}

/// Everything one plan calculation consumes. This is the booth file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    #[serde(default)]
    pub catalog: Catalog,

    /// The selected menu items and their proportions.
    #[serde(default)]
    pub sales_mix: Vec<SalesMixEntry>,

    #[serde(default)]
    pub fixed_costs: FixedCostInputs,

    #[serde(default = "default_days")]
    pub number_of_days: u32,

    #[serde(default)]
    pub target: ProfitTarget,

    #[serde(default)]
    pub settings: SolverConfig,
}

fn default_days() -> u32 {
    1
}

impl PlanInputs {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            sales_mix: Vec::new(),
            fixed_costs: FixedCostInputs::default(),
            number_of_days: default_days(),
            target: ProfitTarget::default(),
            settings: SolverConfig::default(),
        }
    }

    /// Sum of the raw sales-mix proportions.
    pub fn proportion_total(&self) -> f64 {
        self.sales_mix.iter().map(|e| e.proportion_percent).sum()
    }
}
