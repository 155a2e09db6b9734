use std::path::Path;

use crate::error::Result;
use crate::models::ProfitLadderRow;

/// Write the profit ladder to a CSV file, money rounded to 2 decimals.
pub fn write_ladder_csv(rows: &[ProfitLadderRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "profit_percent",
        "fixed_costs",
        "variable_costs",
        "total_capital",
        "profit",
        "revenue",
        "total_units",
        "units_per_day",
        "revenue_per_day",
        "approximate",
    ])?;

    for row in rows {
        wtr.write_record([
            row.profit_percent.to_string(),
            format!("{:.2}", row.fixed_costs),
            format!("{:.2}", row.variable_costs),
            format!("{:.2}", row.total_capital),
            format!("{:.2}", row.profit),
            format!("{:.2}", row.revenue),
            row.total_units.to_string(),
            row.units_per_day.to_string(),
            format!("{:.2}", row.revenue_per_day),
            row.convergence.is_approximate().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
