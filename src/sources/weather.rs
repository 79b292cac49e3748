//! Hourly weather forecast source.
//!
//! Auxiliary context for demand forecasting; the optimizer never consumes
//! weather data directly.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherPoint {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub cloud_cover_percent: f64,
    pub wind_speed_ms: f64,
}

#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the hourly forecast for a location, or `Ok(None)` when the
    /// source is not configured.
    async fn fetch_hourly(&self, lat: f64, lon: f64) -> Result<Option<Vec<WeatherPoint>>>;
}

/// OpenWeather One Call client. Without an API key it reports itself
/// unconfigured instead of failing.
#[derive(Clone)]
pub struct OpenWeatherSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherSource {
    pub fn new(base_url: String, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    async fn fetch_hourly(&self, lat: f64, lon: f64) -> Result<Option<Vec<WeatherPoint>>> {
        let Some(api_key) = &self.api_key else {
            info!("no OpenWeather API key configured; skipping weather fetch");
            return Ok(None);
        };

        let url = format!("{}/data/2.5/onecall", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .get(url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("exclude", "minutely,current,alerts".into()),
                ("units", "metric".into()),
                ("appid", api_key.clone()),
            ])
            .send()
            .await
            .context("weather GET failed")?;
        let status = resp.status();
        let body = resp.text().await.context("weather read failed")?;
        if !status.is_success() {
            anyhow::bail!("weather API error: HTTP {status}: {body}");
        }

        let raw: RawOneCall = serde_json::from_str(&body).context("weather JSON parse failed")?;
        let points = raw
            .hourly
            .into_iter()
            .filter_map(|h| {
                DateTime::from_timestamp(h.dt, 0).map(|timestamp| WeatherPoint {
                    timestamp,
                    temperature_c: h.temp,
                    cloud_cover_percent: h.clouds,
                    wind_speed_ms: h.wind_speed,
                })
            })
            .collect();
        Ok(Some(points))
    }
}

#[derive(Debug, Deserialize)]
struct RawOneCall {
    hourly: Vec<RawHourly>,
}

#[derive(Debug, Deserialize)]
struct RawHourly {
    dt: i64,
    temp: f64,
    clouds: f64,
    wind_speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_is_not_an_error() {
        let source = OpenWeatherSource::new(
            "https://api.example.invalid".into(),
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        let fetched = source.fetch_hourly(40.7128, -74.0060).await.unwrap();
        assert!(fetched.is_none());
    }

    #[test]
    fn parses_one_call_payload() {
        let body = r#"{"hourly":[{"dt":1735689600,"temp":3.5,"clouds":80.0,"wind_speed":4.2}]}"#;
        let raw: RawOneCall = serde_json::from_str(body).unwrap();
        assert_eq!(raw.hourly.len(), 1);
        assert!((raw.hourly[0].temp - 3.5).abs() < 1e-12);
    }
}
