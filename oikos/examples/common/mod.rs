#![allow(dead_code)]

use std::sync::Arc;

use oikos_core::OikosSource;

/// Route example traffic to the mock source when `OIKOS_EXAMPLES_USE_MOCK`
/// is set (CI), otherwise to the real FRED upstream with the key from
/// `FRED_API_KEY` passed through explicitly.
#[must_use]
pub fn get_source() -> Arc<dyn OikosSource> {
    if std::env::var("OIKOS_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        Arc::new(oikos_mock::MockSource::new())
    } else {
        let builder = match std::env::var("FRED_API_KEY") {
            Ok(key) => oikos_fred::FredConnector::builder().api_key(key),
            // Without a key every fetch fails with AuthRequired, which the
            // examples surface as a non-zero exit.
            Err(_) => oikos_fred::FredConnector::builder(),
        };
        Arc::new(builder.build().expect("FRED connector builds"))
    }
}

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
