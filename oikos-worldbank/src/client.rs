use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use oikos_core::{
    Frequency, NormalizedSeries, Observation, OikosError, RegionCode, SeriesId, SeriesMeta,
    YearRange,
};
use serde::Deserialize;
use url::Url;

use crate::NAME;

/// Low-level World Bank REST client.
#[derive(Clone)]
pub(crate) struct WorldBankClient {
    http: reqwest::Client,
    base_url: Url,
    per_page: usize,
}

#[derive(Debug, Deserialize)]
struct PageMeta {
    #[serde(default = "one")]
    page: usize,
    #[serde(default = "one")]
    pages: usize,
}

const fn one() -> usize {
    1
}

#[derive(Debug, Deserialize)]
struct Row {
    indicator: Reference,
    #[serde(default)]
    countryiso3code: String,
    date: String,
    value: Option<f64>,
    #[serde(default)]
    unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Reference {
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    message: Vec<MessageEntry>,
}

#[derive(Debug, Deserialize)]
struct MessageEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    value: String,
}

impl WorldBankClient {
    pub(crate) const fn new(http: reqwest::Client, base_url: Url, per_page: usize) -> Self {
        Self {
            http,
            base_url,
            per_page,
        }
    }

    /// Fetch all pages for (indicator, regions, years) and split the rows
    /// into one normalized series per requested region, in request order.
    pub(crate) async fn regional_observations(
        &self,
        indicator: &SeriesId,
        regions: &[RegionCode],
        years: &YearRange,
    ) -> Result<Vec<NormalizedSeries>, OikosError> {
        let rows = self.all_rows(indicator, regions, years).await?;

        let title = rows
            .iter()
            .map(|r| r.indicator.value.clone())
            .find(|t| !t.is_empty());
        let unit = rows
            .iter()
            .filter_map(|r| r.unit.clone())
            .find(|u| !u.is_empty());

        let mut grouped: BTreeMap<String, Vec<Observation>> = BTreeMap::new();
        for row in rows {
            // A null value means the upstream has no datum for that year;
            // the year is absent from the series, not recorded as missing.
            let Some(value) = row.value else { continue };
            let date = parse_year_date(&row.date)?;
            if !years.contains(date.year()) {
                continue;
            }
            grouped
                .entry(row.countryiso3code.clone())
                .or_default()
                .push(Observation::new(date, Some(value)));
        }

        let meta = SeriesMeta {
            title,
            unit,
            frequency: Some(Frequency::Annual),
            seasonally_adjusted: None,
        };

        Ok(regions
            .iter()
            .map(|region| {
                let observations = grouped.remove(region.as_str()).unwrap_or_default();
                NormalizedSeries::new_regional(
                    indicator.clone(),
                    region.clone(),
                    meta.clone(),
                    observations,
                )
            })
            .collect())
    }

    async fn all_rows(
        &self,
        indicator: &SeriesId,
        regions: &[RegionCode],
        years: &YearRange,
    ) -> Result<Vec<Row>, OikosError> {
        let joined = regions
            .iter()
            .map(RegionCode::as_str)
            .collect::<Vec<_>>()
            .join(";");
        let path = format!("country/{joined}/indicator/{}", indicator.as_str());

        let mut out: Vec<Row> = Vec::new();
        let mut page = 1usize;
        loop {
            let mut url = self
                .base_url
                .join(&path)
                .map_err(|e| OikosError::InvalidArg(format!("bad World Bank path {path}: {e}")))?;
            {
                let mut q = url.query_pairs_mut();
                q.append_pair("format", "json");
                q.append_pair("date", &format!("{}:{}", years.start(), years.end()));
                q.append_pair("per_page", &self.per_page.to_string());
                q.append_pair("page", &page.to_string());
            }
            tracing::debug!(indicator = %indicator, page, "fetching World Bank page");
            let (meta, mut rows) = self.get_page(url, indicator).await?;
            let fetched = rows.len();
            out.append(&mut rows);
            if fetched == 0 || meta.page >= meta.pages {
                break;
            }
            page = meta.page + 1;
        }
        Ok(out)
    }

    /// Issue one page GET and decode the `[meta, rows]` body, normalizing
    /// the upstream's 200-with-message error shape.
    async fn get_page(
        &self,
        url: Url,
        indicator: &SeriesId,
    ) -> Result<(PageMeta, Vec<Row>), OikosError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| OikosError::upstream(NAME, e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| OikosError::upstream(NAME, e.to_string()))?;

        if !status.is_success() {
            return Err(OikosError::upstream(NAME, format!("status {status}")));
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| OikosError::malformed(NAME, format!("undecodable body: {e}")))?;
        let Some(elements) = value.as_array() else {
            return Err(OikosError::malformed(NAME, "expected a JSON array body"));
        };

        match elements.len() {
            0 => Err(OikosError::malformed(NAME, "empty array body")),
            // Single-element bodies carry the error envelope.
            1 => Err(normalize_message(&elements[0], indicator)),
            _ => {
                let meta: PageMeta = serde_json::from_value(elements[0].clone())
                    .map_err(|e| OikosError::malformed(NAME, format!("bad page metadata: {e}")))?;
                let rows: Vec<Row> = if elements[1].is_null() {
                    Vec::new()
                } else {
                    serde_json::from_value(elements[1].clone())
                        .map_err(|e| OikosError::malformed(NAME, format!("bad row list: {e}")))?
                };
                Ok((meta, rows))
            }
        }
    }
}

fn normalize_message(envelope: &serde_json::Value, indicator: &SeriesId) -> OikosError {
    let Ok(msg) = serde_json::from_value::<Message>(envelope.clone()) else {
        return OikosError::malformed(NAME, "unrecognized error envelope");
    };
    let Some(entry) = msg.message.first() else {
        return OikosError::malformed(NAME, "empty error envelope");
    };
    // Error id 120 is "Invalid value": the indicator or country code is
    // unknown to the upstream.
    if entry.id == "120" {
        OikosError::invalid_identifier(indicator.as_str())
    } else {
        OikosError::upstream(NAME, entry.value.clone())
    }
}

/// World Bank annual rows date as a bare year; January 1 anchors them on
/// the calendar axis.
fn parse_year_date(raw: &str) -> Result<NaiveDate, OikosError> {
    let year: i32 = raw
        .parse()
        .map_err(|_| OikosError::malformed(NAME, format!("unsupported date format: {raw}")))?;
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| OikosError::malformed(NAME, format!("out-of-range year: {raw}")))
}
