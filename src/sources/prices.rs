//! Day-ahead electricity price source.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::info;

use crate::domain::PriceCurve;

/// External provider of a day-ahead hourly price curve.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch tomorrow's hourly prices, or `Ok(None)` when the source is
    /// not configured for this deployment. Hours the provider omits are
    /// priced at zero via [`PriceCurve::from_partial`].
    async fn fetch_day_ahead(&self) -> Result<Option<PriceCurve>>;
}

/// EIA-style hourly price series client. Without an API key it reports
/// itself unconfigured instead of failing.
#[derive(Clone)]
pub struct EiaPriceSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    series_id: String,
}

impl EiaPriceSource {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        series_id: String,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("tou-scheduler/0.1"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
            series_id,
        })
    }
}

#[async_trait]
impl PriceSource for EiaPriceSource {
    async fn fetch_day_ahead(&self) -> Result<Option<PriceCurve>> {
        let Some(api_key) = &self.api_key else {
            info!("no EIA API key configured; skipping price fetch");
            return Ok(None);
        };

        let url = format!("{}/series/", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .get(url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("series_id", self.series_id.as_str()),
            ])
            .send()
            .await
            .context("price GET failed")?;
        let status = resp.status();
        let body = resp.text().await.context("price read failed")?;
        if !status.is_success() {
            anyhow::bail!("price API error: HTTP {status}: {body}");
        }

        let raw: RawSeriesResponse =
            serde_json::from_str(&body).context("price JSON parse failed")?;
        let entries = raw
            .series
            .into_iter()
            .flat_map(|s| s.data)
            .map(|p| (p.hour, p.price_per_kwh));
        Ok(Some(PriceCurve::from_partial(entries)))
    }
}

#[derive(Debug, Deserialize)]
struct RawSeriesResponse {
    series: Vec<RawSeries>,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    data: Vec<RawPricePoint>,
}

#[derive(Debug, Deserialize)]
struct RawPricePoint {
    hour: u8,
    price_per_kwh: f64,
}
