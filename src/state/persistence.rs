use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{BusinessPlan, PlanInputs};

/// Load booth inputs from a JSON file.
///
/// Deduplicates catalog entries by id (last occurrence wins).
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<PlanInputs> {
    let content = fs::read_to_string(path)?;
    let mut inputs: PlanInputs = serde_json::from_str(&content)?;
    inputs.catalog.dedup();
    Ok(inputs)
}

/// Save booth inputs to a JSON file.
pub fn save_inputs<P: AsRef<Path>>(path: P, inputs: &PlanInputs) -> Result<()> {
    let json = serde_json::to_string_pretty(inputs)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save a computed plan verbatim as JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &BusinessPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
