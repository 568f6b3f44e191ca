use chrono::NaiveDate;
use oikos_core::{
    Frequency, NormalizedSeries, Observation, RegionCode, SeriesId, SeriesMeta, YearRange,
};

pub fn by_indicator(
    indicator: &SeriesId,
    regions: &[RegionCode],
    years: &YearRange,
) -> Option<Vec<NormalizedSeries>> {
    let (title, unit) = match indicator.as_str() {
        "NY.GDP.MKTP.CD" => ("GDP (current US$)", "current US$"),
        "SP.POP.TOTL" => ("Population, total", "persons"),
        _ => return None,
    };

    let meta = SeriesMeta {
        title: Some(title.to_string()),
        unit: Some(unit.to_string()),
        frequency: Some(Frequency::Annual),
        seasonally_adjusted: None,
    };

    Some(
        regions
            .iter()
            .map(|region| {
                let observations = rows(indicator.as_str(), region.as_str())
                    .iter()
                    .filter(|&&(year, _)| years.contains(year))
                    .map(|&(year, value)| {
                        Observation::new(
                            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
                            Some(value),
                        )
                    })
                    .collect();
                NormalizedSeries::new_regional(
                    indicator.clone(),
                    region.clone(),
                    meta.clone(),
                    observations,
                )
            })
            .collect(),
    )
}

// 2011 is deliberately absent for JPN GDP, mirroring how the upstream
// reports gaps (the year simply is not there).
fn rows(indicator: &str, region: &str) -> &'static [(i32, f64)] {
    match (indicator, region) {
        ("NY.GDP.MKTP.CD", "USA") => &[
            (2010, 1.4964e13),
            (2011, 1.5600e13),
            (2012, 1.6254e13),
            (2013, 1.6843e13),
            (2014, 1.7551e13),
        ],
        ("NY.GDP.MKTP.CD", "JPN") => &[
            (2010, 5.7591e12),
            (2012, 6.2032e12),
            (2013, 5.2126e12),
            (2014, 4.8965e12),
        ],
        ("NY.GDP.MKTP.CD", "GBR") => &[
            (2010, 2.4934e12),
            (2011, 2.6637e12),
            (2012, 2.7074e12),
            (2013, 2.7842e12),
            (2014, 3.0649e12),
        ],
        ("SP.POP.TOTL", "USA") => &[
            (2010, 3.0901e8),
            (2011, 3.1158e8),
            (2012, 3.1388e8),
            (2013, 3.1611e8),
            (2014, 3.1839e8),
        ],
        ("SP.POP.TOTL", "JPN") => &[
            (2010, 1.2806e8),
            (2011, 1.2793e8),
            (2012, 1.2759e8),
            (2013, 1.2730e8),
            (2014, 1.2710e8),
        ],
        _ => &[],
    }
}
