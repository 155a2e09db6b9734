use crate::models::{BusinessPlan, MenuItemRef, ProfitLadderRow, ProfitType};
use crate::state::BoothStateManager;

/// Display a computed plan.
pub fn display_plan(plan: &BusinessPlan) {
    println!();
    println!("=== Booth Business Plan ===");
    if plan.is_approximate() {
        println!("(some figures are approximate: iteration limit reached)");
    }
    println!();

    let fixed = &plan.fixed_costs;
    println!("--- Fixed Costs ({} day(s)) ---", plan.number_of_days);
    println!("Rent:                {:>12.2}", fixed.rent);
    println!("Staff:               {:>12.2}", fixed.staff);
    println!("Equipment:           {:>12.2}", fixed.equipment);
    println!("Additional expenses: {:>12.2}", fixed.additional_expenses);
    println!("Total:               {:>12.2}", fixed.total);
    println!();

    println!("Average price: {:.2}", plan.average_price);
    println!("Sales mix total: {:.2}%", plan.proportion_total);
    println!();

    let be = &plan.break_even;
    println!("--- Break-even ---");
    println!("Units needed:   {}", be.units_needed);
    println!("Revenue needed: {:.2}", be.revenue_needed);
    println!("Daily target:   {} units", be.daily_target);
    println!("Ingredients:    {:.2}", be.ingredient_cost);
    if be.convergence.is_approximate() {
        println!("(approximate)");
    }
    println!();

    if !plan.ingredients.is_empty() {
        println!("--- Ingredients at Break-even ---");
        let width = plan
            .ingredients
            .iter()
            .map(|r| r.name.len().max(r.ingredient_id.len()))
            .max()
            .unwrap_or(10);

        for req in &plan.ingredients {
            let name = if req.name.is_empty() {
                &req.ingredient_id
            } else {
                &req.name
            };
            println!(
                "  {:<width$} {:>10} {:<6} x {:>8.2} = {:>10.2}",
                name,
                req.quantity,
                req.unit,
                req.cost_per_unit,
                req.cost,
                width = width
            );
        }
        println!();
    }

    let tp = &plan.target_profit;
    let target = match tp.profit_type {
        ProfitType::Percentage => format!("{}%", tp.profit_value),
        ProfitType::Amount => format!("{:.2}", tp.profit_value),
    };
    println!("--- Target Profit ({}) ---", target);
    println!("Units needed:               {}", tp.units_needed);
    println!("Revenue needed:             {:.2}", tp.revenue_needed);
    println!("Ingredient cost:            {:.2}", tp.additional_ingredient_cost);
    println!("Total capital with profit:  {:.2}", tp.total_capital_with_profit);
    if tp.convergence.is_approximate() {
        println!("(approximate)");
    }
    println!();

    if let Some(rows) = &plan.profit_ladder {
        display_ladder(rows);
    }

    if !plan.warnings.is_empty() {
        println!("--- Warnings ---");
        for warning in &plan.warnings {
            println!("  ! {}", warning);
        }
        println!();
    }
}

/// Display the profit ladder as a table.
pub fn display_ladder(rows: &[ProfitLadderRow]) {
    if rows.is_empty() {
        println!("No profit ladder rows.");
        return;
    }

    println!("--- Profit Ladder ---");
    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>12} {:>12} {:>8} {:>8} {:>12}",
        "profit", "fixed", "variable", "capital", "profit", "revenue", "units", "/day", "rev/day"
    );

    for row in rows {
        let marker = if row.convergence.is_approximate() { " ~" } else { "" };
        println!(
            "{:>5}% {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>8} {:>8} {:>12.2}{}",
            row.profit_percent,
            row.fixed_costs,
            row.variable_costs,
            row.total_capital,
            row.profit,
            row.revenue,
            row.total_units,
            row.units_per_day,
            row.revenue_per_day,
            marker
        );
    }
    println!();
}

/// Display the current sales mix.
pub fn display_sales_mix(manager: &BoothStateManager) {
    let inputs = manager.inputs();
    if inputs.sales_mix.is_empty() {
        println!("Sales mix: (none selected)");
        return;
    }

    println!();
    println!("=== Sales Mix ({} items) ===", inputs.sales_mix.len());
    for entry in &inputs.sales_mix {
        let label = inputs
            .catalog
            .menu_item(&entry.menu_item_id)
            .map(MenuItemRef::label)
            .unwrap_or("(missing)");
        println!("  {:<24} {:>6.2}%", label, entry.proportion_percent);
    }
    println!("  {:<24} {:>6.2}%", "Total", manager.proportion_total());
    println!();
}

/// Display per-unit margins for every catalog menu item.
pub fn display_margins(manager: &BoothStateManager) {
    println!("=== Menu Margins ===");
    for (item, margin) in manager.margins() {
        let selected = if manager.is_selected(&item.id) { "*" } else { " " };
        println!(
            " {} {:<24} price {:>8.2}  margin {:>8.2}",
            selected,
            item.label(),
            item.price,
            margin
        );
    }
    println!();
}
