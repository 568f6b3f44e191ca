mod common;

use oikos::{FillPolicy, correlation_matrix, describe, growth_rate, merge, moving_average};

// Pure-analysis walkthrough over the bundled sample data: no network, no
// key, always reproducible.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let table = merge(oikos_mock::sample_series(), FillPolicy::LeaveMissing)?;
    println!(
        "Sample table: {} monthly rows x {} indicators",
        table.n_rows(),
        table.n_cols()
    );

    let gdp = table
        .column("gdp_billions")
        .ok_or("sample data is missing gdp_billions")?;

    // Year-over-year growth on monthly data, then a 3-month smoothing.
    let yoy = growth_rate(gdp.values(), 12)?;
    let smoothed = moving_average(&yoy, 3)?;
    let with_growth = table
        .with_column("gdp_yoy_growth", yoy)?
        .with_column("gdp_yoy_growth_3m", smoothed)?;

    println!("\n## GDP year-over-year growth (last 6 months):");
    let rows = with_growth.n_rows();
    for (row, date) in with_growth.index().iter().enumerate().skip(rows.saturating_sub(6)) {
        let growth = with_growth.column("gdp_yoy_growth").and_then(|c| c.values()[row]);
        match growth {
            Some(g) => println!(" - {date}: {:+.2}%", g * 100.0),
            None => println!(" - {date}: <missing>"),
        }
    }

    println!("\n## Descriptive statistics:");
    for summary in describe(&table) {
        println!(
            " - {:<20} n={} mean={:?} std={:?}",
            summary.name, summary.count, summary.mean, summary.std_dev
        );
    }

    println!("\n## Correlations:");
    let corr = correlation_matrix(&table);
    for a in corr.labels() {
        for b in corr.labels() {
            if a < b
                && let Some(r) = corr.get(a, b)
            {
                println!(" - corr({a}, {b}) = {r:+.3}");
            }
        }
    }

    Ok(())
}
