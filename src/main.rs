use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use booth_plan_rs::cli::{Cli, Command};
use booth_plan_rs::error::{PlanError, Result};
use booth_plan_rs::interface::{
    display_ladder, display_margins, display_plan, display_sales_mix, edit_sales_mix,
    prompt_yes_no, write_ladder_csv,
};
use booth_plan_rs::logging;
use booth_plan_rs::models::FixedCosts;
use booth_plan_rs::planner::{generate_ladder, recompute, recompute_with_ladder, SolveContext};
use booth_plan_rs::state::{load_inputs, save_inputs, save_plan, BoothStateManager};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    if !cli.file.exists() {
        eprintln!("Booth file not found: {}", cli.file.display());
        eprintln!("Please ensure booth.json exists in the current directory.");
        return Ok(());
    }

    match command {
        Command::Plan { ladder, out } => cmd_plan(&cli.file, ladder, out),
        Command::Ladder { percentages, csv } => cmd_ladder(&cli.file, percentages, csv),
        Command::Mix => cmd_mix(&cli.file),
    }
}

/// Recompute and display the plan.
fn cmd_plan(path: &Path, ladder: bool, out: Option<PathBuf>) -> Result<()> {
    let inputs = load_inputs(path)?;

    let result = if ladder {
        recompute_with_ladder(&inputs)
    } else {
        recompute(&inputs)
    };

    let plan = match result {
        Ok(plan) => plan,
        Err(PlanError::DegenerateInput(reason)) => {
            println!("Plan not computable yet: {}.", reason);
            println!("Use 'mix' to select menu items and set their shares.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    display_plan(&plan);

    if let Some(out) = out {
        save_plan(&out, &plan)?;
        info!(path = %out.display(), "plan saved");
        println!("Plan saved to {}", out.display());
    }

    Ok(())
}

/// Display (and optionally export) the profit ladder.
fn cmd_ladder(path: &Path, percentages: Option<Vec<u32>>, csv: Option<PathBuf>) -> Result<()> {
    let inputs = load_inputs(path)?;
    let percentages = percentages.unwrap_or_else(|| inputs.settings.ladder_percentages.clone());

    let fixed_costs = FixedCosts::from_inputs(&inputs.fixed_costs, inputs.number_of_days);
    let ctx = SolveContext::new(
        &inputs.catalog,
        &inputs.sales_mix,
        fixed_costs,
        inputs.number_of_days,
        &inputs.settings,
    )?;

    let rows = generate_ladder(&ctx, &percentages)?;
    display_ladder(&rows);

    if let Some(csv) = csv {
        write_ladder_csv(&rows, &csv)?;
        println!("Wrote profit ladder to {}", csv.display());
    }

    Ok(())
}

/// Edit the sales mix and save it back to the booth file.
fn cmd_mix(path: &Path) -> Result<()> {
    let inputs = load_inputs(path)?;
    let mut manager = BoothStateManager::new(inputs);

    println!(
        "Loaded {} menu items ({} selected)",
        manager.inputs().catalog.menu_items.len(),
        manager.selected_items().len()
    );
    display_margins(&manager);
    display_sales_mix(&manager);

    edit_sales_mix(&mut manager)?;
    display_sales_mix(&manager);

    if prompt_yes_no("Save updated booth file?", true)? {
        save_inputs(path, manager.inputs())?;
        println!("Booth file saved.");

        match recompute(manager.inputs()) {
            Ok(plan) => display_plan(&plan),
            Err(PlanError::DegenerateInput(reason)) => {
                println!("Plan not computable yet: {}.", reason)
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
