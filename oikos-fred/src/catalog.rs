//! Well-known FRED series mnemonics, for discoverability in examples and
//! quick-start code. The list is a convenience, not a registry: any valid
//! FRED identifier works with the connector.

/// Gross Domestic Product, billions of dollars, quarterly.
pub const GDP: &str = "GDP";
/// Civilian unemployment rate, percent, monthly.
pub const UNRATE: &str = "UNRATE";
/// Consumer Price Index for All Urban Consumers, monthly.
pub const CPIAUCSL: &str = "CPIAUCSL";
/// Effective federal funds rate, percent, monthly.
pub const FEDFUNDS: &str = "FEDFUNDS";
/// 10-year Treasury constant maturity rate, percent, daily.
pub const DGS10: &str = "DGS10";
/// US / Euro foreign exchange rate, daily.
pub const DEXUSEU: &str = "DEXUSEU";
/// Personal consumption expenditures, monthly.
pub const PCE: &str = "PCE";
/// All employees, total nonfarm, thousands of persons, monthly.
pub const PAYEMS: &str = "PAYEMS";
