mod common;

use chrono::NaiveDate;
use oikos::{FillPolicy, Oikos, SeriesId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let source = common::get_source();
    let oikos = Oikos::builder().with_source(source).build()?;

    let ids = vec![SeriesId::new("GDP")?, SeriesId::new("UNRATE")?];
    println!("Building a merged table for {ids:?}...");

    let report = oikos
        .table()
        .series(&ids)?
        .start(NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"))
        .end(NaiveDate::from_ymd_opt(2020, 6, 1).expect("valid date"))
        .fill_policy(FillPolicy::LeaveMissing)
        .run()
        .await?;

    let table = &report.table;
    println!("\n## Merged Table ({} rows x {} columns):", table.n_rows(), table.n_cols());
    print!("{:<12}", "date");
    for column in table.columns() {
        print!("{:>18}", column.name());
    }
    println!();
    for (row, date) in table.index().iter().enumerate() {
        print!("{:<12}", date.to_string());
        for column in table.columns() {
            match column.values()[row] {
                Some(v) => print!("{v:>18.2}"),
                None => print!("{:>18}", "-"),
            }
        }
        println!();
    }

    if !report.failures.is_empty() {
        eprintln!("Failures:");
        for (id, err) in &report.failures {
            eprintln!("- {id} -> {err}");
        }
    }

    Ok(())
}
