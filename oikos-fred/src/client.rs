use chrono::NaiveDate;
use oikos_core::{Frequency, Observation, OikosError, SeriesId, SeriesMeta, SeriesRequest};
use serde::Deserialize;
use url::Url;

use crate::NAME;

/// Low-level FRED REST client. One instance per connector; `reqwest`'s
/// client is internally pooled and cheap to clone.
#[derive(Clone)]
pub(crate) struct FredClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    page_limit: usize,
}

#[derive(Debug, Deserialize)]
struct ObservationsPage {
    count: usize,
    #[serde(default)]
    offset: usize,
    observations: Vec<ObservationRow>,
}

#[derive(Debug, Deserialize)]
struct ObservationRow {
    date: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct SeriesPage {
    seriess: Vec<SeriesRow>,
}

#[derive(Debug, Deserialize)]
struct SeriesRow {
    title: Option<String>,
    units: Option<String>,
    frequency_short: Option<String>,
    seasonal_adjustment_short: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error_message: Option<String>,
}

impl FredClient {
    pub(crate) const fn new(
        http: reqwest::Client,
        base_url: Url,
        api_key: Option<String>,
        page_limit: usize,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
            page_limit,
        }
    }

    /// The key, or `AuthRequired` before any request is issued.
    fn key(&self) -> Result<&str, OikosError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| OikosError::auth_required(NAME))
    }

    /// Fetch all observation pages for `id` and concatenate them.
    pub(crate) async fn observations(
        &self,
        id: &SeriesId,
        req: &SeriesRequest,
    ) -> Result<Vec<Observation>, OikosError> {
        let key = self.key()?.to_string();
        let mut out: Vec<Observation> = Vec::new();
        let mut offset = 0usize;
        loop {
            let mut url = self.endpoint("series/observations")?;
            {
                let mut q = url.query_pairs_mut();
                q.append_pair("series_id", id.as_str());
                q.append_pair("api_key", &key);
                q.append_pair("file_type", "json");
                q.append_pair("observation_start", &req.start().to_string());
                if let Some(end) = req.end() {
                    q.append_pair("observation_end", &end.to_string());
                }
                q.append_pair("limit", &self.page_limit.to_string());
                q.append_pair("offset", &offset.to_string());
            }
            tracing::debug!(series = %id, offset, "fetching FRED observations page");
            let page: ObservationsPage = self.get_json(url, id).await?;
            let fetched = page.observations.len();
            for row in page.observations {
                out.push(parse_row(&row)?);
            }
            offset = page.offset + fetched;
            if fetched == 0 || offset >= page.count {
                break;
            }
        }
        Ok(out)
    }

    /// Fetch series metadata (title, units, native frequency).
    pub(crate) async fn series_info(&self, id: &SeriesId) -> Result<SeriesMeta, OikosError> {
        let key = self.key()?.to_string();
        let mut url = self.endpoint("series")?;
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("series_id", id.as_str());
            q.append_pair("api_key", &key);
            q.append_pair("file_type", "json");
        }
        let page: SeriesPage = self.get_json(url, id).await?;
        let Some(row) = page.seriess.into_iter().next() else {
            return Err(OikosError::invalid_identifier(id.as_str()));
        };
        Ok(SeriesMeta {
            title: row.title,
            unit: row.units,
            frequency: row.frequency_short.as_deref().and_then(frequency_from_code),
            seasonally_adjusted: row.seasonal_adjustment_short.map(|s| s != "NSA"),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, OikosError> {
        self.base_url
            .join(path)
            .map_err(|e| OikosError::InvalidArg(format!("bad FRED endpoint {path}: {e}")))
    }

    /// Issue a GET and decode the success body, normalizing every failure
    /// mode into the workspace taxonomy.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        id: &SeriesId,
    ) -> Result<T, OikosError> {
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
            return Err(normalize_failure(status, &body, id));
        }
        serde_json::from_str(&body)
            .map_err(|e| OikosError::malformed(NAME, format!("undecodable body: {e}")))
    }
}

fn parse_row(row: &ObservationRow) -> Result<Observation, OikosError> {
    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
        .map_err(|_| OikosError::malformed(NAME, format!("bad observation date: {}", row.date)))?;
    // "." is FRED's explicit missing-data marker.
    let value = match row.value.as_str() {
        "." => None,
        raw => Some(raw.parse::<f64>().map_err(|_| {
            OikosError::malformed(NAME, format!("non-numeric observation value: {raw}"))
        })?),
    };
    Ok(Observation::new(date, value))
}

/// Map a non-2xx FRED response onto the error taxonomy.
///
/// FRED reports both unknown series and key problems as HTTP 400 with a
/// prose `error_message`; the message text is the only discriminator.
fn normalize_failure(status: reqwest::StatusCode, body: &str, id: &SeriesId) -> OikosError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error_message)
        .unwrap_or_default();
    let lowered = message.to_ascii_lowercase();

    if lowered.contains("api_key") || lowered.contains("api key") {
        return OikosError::auth_required(NAME);
    }
    if lowered.contains("does not exist") || lowered.contains("not found") {
        return OikosError::invalid_identifier(id.as_str());
    }
    if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return OikosError::upstream(NAME, format!("status {status}: {message}"));
    }
    OikosError::upstream(NAME, format!("unexpected status {status}: {message}"))
}

fn frequency_from_code(code: &str) -> Option<Frequency> {
    // Some series carry a qualifier after the cadence letter ("WEF",
    // "M13"); only the leading letter matters here.
    match code.chars().next()? {
        'D' => Some(Frequency::Daily),
        'W' => Some(Frequency::Weekly),
        'M' => Some(Frequency::Monthly),
        'Q' => Some(Frequency::Quarterly),
        'A' => Some(Frequency::Annual),
        _ => None,
    }
}
