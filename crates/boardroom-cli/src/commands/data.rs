//! Dataset overview command.

use anyhow::Result;
use colored::Colorize;

use boardroom_application::load_dataset;
use boardroom_core::data::BusinessData;
use boardroom_core::insights::{metric_series, yoy_growth, Metric};

pub fn execute(selector: &str) -> Result<()> {
    let data = load_dataset(selector)?;
    print_overview(&data);
    Ok(())
}

/// Prints the company header, key metric table, and YoY growth lines.
pub fn print_overview(data: &BusinessData) {
    println!(
        "{} - {} (founded {})",
        data.company_name.bold(),
        data.industry,
        data.founding_year
    );
    println!("{}\n", data.mission.italic());

    println!(
        "{:<6} {:>12} {:>12} {:>10} {:>13} {:>6}",
        "Year".bold(),
        "Revenue".bold(),
        "Profit".bold(),
        "Employees".bold(),
        "Mkt share %".bold(),
        "CSAT".bold()
    );

    let revenue = metric_series(data, Metric::Revenue);
    let profit = metric_series(data, Metric::Profit);
    let employees = metric_series(data, Metric::Employees);
    let share = metric_series(data, Metric::MarketShare);
    let csat = metric_series(data, Metric::CustomerSatisfaction);

    for (i, point) in revenue.iter().enumerate() {
        let col = |series: &[boardroom_core::insights::YearValue]| {
            series.get(i).map(|p| p.value).unwrap_or(0.0)
        };
        println!(
            "{:<6} {:>11.1}M {:>11.2}M {:>10} {:>13.1} {:>6.1}",
            point.year,
            point.value / 1_000_000.0,
            col(&profit) / 1_000_000.0,
            col(&employees) as u64,
            col(&share),
            col(&csat),
        );
    }

    println!();
    for (label, metric) in [
        ("Revenue growth", Metric::Revenue),
        ("Market share growth", Metric::MarketShare),
        ("Headcount growth", Metric::Employees),
    ] {
        let growth = yoy_growth(data, metric)
            .iter()
            .map(|g| format!("{}: {:+.2}%", g.year, g.growth))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{:<20} {}", label.bold(), growth);
    }
}
