mod common;

use chrono::NaiveDate;
use oikos::{Oikos, SeriesId, SeriesRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let source = common::get_source();
    let oikos = Oikos::builder().with_source(source).build()?;

    let id = SeriesId::new("UNRATE")?;
    let req = SeriesRequest::try_new(
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2020, 6, 1),
    )?;

    println!("Fetching {id}...");
    let series = oikos.series(&id, &req).await?;

    println!(
        "## {} ({} observations, frequency {:?}):",
        series.column_name(),
        series.len(),
        series.meta().frequency
    );
    for obs in series.observations() {
        match obs.value {
            Some(v) => println!(" - {}: {v:.2}", obs.date),
            None => println!(" - {}: <missing>", obs.date),
        }
    }

    Ok(())
}
