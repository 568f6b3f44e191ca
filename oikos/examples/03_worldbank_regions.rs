mod common;

use std::sync::Arc;

use oikos::{Oikos, RegionCode, SeriesId, YearRange};
use oikos_core::OikosSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    // The World Bank upstream needs no key, so this example can hit it
    // directly; the mock flag still routes it offline for CI.
    let source: Arc<dyn OikosSource> = if std::env::var("OIKOS_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        Arc::new(oikos_mock::MockSource::new())
    } else {
        Arc::new(oikos_worldbank::WorldBankConnector::new_default()?)
    };
    let oikos = Oikos::builder().with_source(source).build()?;

    let indicator = SeriesId::new(oikos_worldbank::catalog::GDP_USD)?;
    let regions = vec![
        RegionCode::new("USA")?,
        RegionCode::new("JPN")?,
        RegionCode::new("GBR")?,
    ];
    let years = YearRange::try_new(2010, 2014)?;

    println!("Fetching {indicator} for {} regions...", regions.len());
    let series = oikos.regional(&indicator, &regions, &years).await?;

    for s in &series {
        println!("\n## {} ({} observations):", s.column_name(), s.len());
        for obs in s.observations() {
            if let Some(v) = obs.value {
                println!(" - {}: {:.3e}", obs.date, v);
            }
        }
    }

    Ok(())
}
