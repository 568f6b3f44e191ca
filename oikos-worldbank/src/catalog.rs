//! Well-known World Bank indicator codes, for discoverability in examples
//! and quick-start code.

/// GDP in current US dollars.
pub const GDP_USD: &str = "NY.GDP.MKTP.CD";
/// GDP per capita in current US dollars.
pub const GDP_PER_CAPITA_USD: &str = "NY.GDP.PCAP.CD";
/// Total population.
pub const POPULATION: &str = "SP.POP.TOTL";
/// Consumer price inflation, annual percent.
pub const INFLATION: &str = "FP.CPI.TOTL.ZG";
/// Unemployment, percent of total labor force.
pub const UNEMPLOYMENT: &str = "SL.UEM.TOTL.ZS";
/// Trade as a percent of GDP.
pub const TRADE_SHARE: &str = "NE.TRD.GNFS.ZS";
