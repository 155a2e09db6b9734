use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::MenuItemRef;
use crate::planner::constants::{FUZZY_MATCH_THRESHOLD, PROPORTION_EPSILON, PROPORTION_TARGET};
use crate::state::BoothStateManager;

/// Menu items whose name resembles `input`, best match first.
pub fn fuzzy_matches<'a>(
    items: &[&'a MenuItemRef],
    input: &str,
) -> Vec<(&'a MenuItemRef, f64)> {
    let input = input.to_lowercase();
    let mut candidates: Vec<(&MenuItemRef, f64)> = items
        .iter()
        .map(|m| (*m, jaro_winkler(&m.label().to_lowercase(), &input)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Prompt for a menu item by name with fuzzy matching.
///
/// Returns `None` when the user finishes (empty input) without picking one.
pub fn prompt_menu_item(manager: &BoothStateManager) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Menu item to add or edit (press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Exact id or name first
        if let Some(item) = manager.find_menu_item(input) {
            return Ok(Some(item.id.clone()));
        }

        let all: Vec<&MenuItemRef> = manager.inputs().catalog.menu_items.iter().collect();
        let candidates = fuzzy_matches(&all, input);

        match candidates.as_slice() {
            [] => {
                println!("No matching menu item found for '{}'", input);
            }
            [(item, _)] => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", item.label()))
                    .default(true)
                    .interact()?;
                if confirm {
                    return Ok(Some(item.id.clone()));
                }
            }
            many => {
                let options: Vec<&MenuItemRef> = many.iter().take(5).map(|(m, _)| *m).collect();
                let mut labels: Vec<String> =
                    options.iter().map(|m| m.label().to_string()).collect();
                labels.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&labels)
                    .default(0)
                    .interact()?;

                if let Some(item) = options.get(selection) {
                    return Ok(Some(item.id.clone()));
                }
            }
        }
    }
}

/// Prompt for a sales-mix proportion in percent.
pub fn prompt_proportion(label: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Share of sales for '{}' (%)", label))
        .default(format!("{}", current))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Interactive sales-mix editor: pick items, set their shares, check the total.
pub fn edit_sales_mix(manager: &mut BoothStateManager) -> Result<()> {
    while let Some(id) = prompt_menu_item(manager)? {
        let label = manager
            .find_menu_item(&id)
            .map(|m| m.label().to_string())
            .unwrap_or_else(|| id.clone());

        if manager.is_selected(&id)
            && prompt_yes_no(&format!("Remove '{}' from the mix?", label), false)?
        {
            manager.deselect(&id);
            println!("Removed: {}", label);
            continue;
        }

        manager.select(&id)?;
        let current = manager
            .inputs()
            .sales_mix
            .iter()
            .find(|e| e.menu_item_id == id)
            .map(|e| e.proportion_percent)
            .unwrap_or(0.0);

        match prompt_proportion(&label, current) {
            Ok(percent) => {
                if let Err(e) = manager.set_proportion(&id, percent) {
                    println!("{}", e);
                }
            }
            Err(e) => println!("{}", e),
        }

        println!("Mix total: {:.2}%", manager.proportion_total());
    }

    let total = manager.proportion_total();
    if !manager.inputs().sales_mix.is_empty()
        && (total - PROPORTION_TARGET).abs() > PROPORTION_EPSILON
    {
        println!("Sales mix totals {:.2}% instead of 100%.", total);
        if prompt_yes_no("Split shares evenly across selected items?", true)? {
            manager.split_evenly();
        }
    }

    Ok(())
}
