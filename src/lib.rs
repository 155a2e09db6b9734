pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{BusinessPlan, Catalog, PlanInputs};
pub use planner::{recompute, recompute_with_ladder};
