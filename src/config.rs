use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub solver: SolverConfig,
    pub sources: SourcesConfig,
    pub runlog: RunLogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub appliances: PathBuf,
    pub baseline: PathBuf,
    pub prices: PathBuf,
    pub history: Option<PathBuf>,
    /// When true and history is available, the forecasted load curve
    /// replaces the bundled baseline.
    pub use_forecast_baseline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    pub max_simultaneous: Option<u32>,
    pub time_limit_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    pub price_base_url: String,
    pub eia_api_key: Option<String>,
    pub eia_series_id: String,
    pub weather_base_url: String,
    pub openweather_api_key: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub http_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunLogConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("TOU__").split("__"));
        Ok(figment.extract()?)
    }
}
