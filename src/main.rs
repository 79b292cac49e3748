use std::time::Duration;

use anyhow::{Context, Result};
use tou_scheduler::{
    comparison, config::Config, forecast::{LoadForecaster, SeasonalNaiveForecaster},
    ingest, optimizer::MilpSolver, report,
    runlog::{JsonlRunStore, RunRecord, RunStore},
    sources::{EiaPriceSource, OpenWeatherSource, PriceSource, WeatherSource},
    telemetry::init_tracing,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;
    let timeout = Duration::from_secs(cfg.sources.http_timeout_seconds);

    let appliances = ingest::load_appliances(&cfg.data.appliances)
        .context("loading appliances")?;
    let mut baseline = ingest::load_baseline(&cfg.data.baseline).context("loading baseline")?;
    let mut prices = ingest::load_prices(&cfg.data.prices).context("loading prices")?;
    info!(appliances = appliances.len(), "input data loaded");

    // Day-ahead prices from the configured source override the bundled
    // curve; a fetch failure falls back rather than aborting the run.
    let price_source = EiaPriceSource::new(
        cfg.sources.price_base_url.clone(),
        cfg.sources.eia_api_key.clone(),
        cfg.sources.eia_series_id.clone(),
        timeout,
    )?;
    match price_source.fetch_day_ahead().await {
        Ok(Some(curve)) => {
            info!("using day-ahead prices from the price source");
            prices = curve;
        }
        Ok(None) => {}
        Err(err) => warn!(error = %err, "price fetch failed; using the bundled curve"),
    }

    // Weather is auxiliary context for forecasting, never fed to the
    // optimizer.
    if let (Some(lat), Some(lon)) = (cfg.sources.latitude, cfg.sources.longitude) {
        let weather_source = OpenWeatherSource::new(
            cfg.sources.weather_base_url.clone(),
            cfg.sources.openweather_api_key.clone(),
            timeout,
        )?;
        match weather_source.fetch_hourly(lat, lon).await {
            Ok(Some(points)) => info!(points = points.len(), "weather forecast fetched"),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "weather fetch failed"),
        }
    }

    if let Some(history_path) = &cfg.data.history {
        let history = ingest::load_history(history_path).context("loading usage history")?;
        match SeasonalNaiveForecaster::default().predict_next_24h(&history) {
            Ok(curve) => {
                if cfg.data.use_forecast_baseline {
                    info!("using forecasted baseline load curve");
                    baseline = curve;
                } else {
                    info!("forecasted baseline available (not applied)");
                }
            }
            Err(err) => warn!(error = %err, "baseline forecast skipped"),
        }
    }

    let solver = MilpSolver::new(cfg.solver.time_limit_seconds);
    let cap = cfg.solver.max_simultaneous;
    let prices_for_report = prices.clone();

    // The solve is the one potentially long-running call; keep it off the
    // async threads.
    let result = tokio::task::spawn_blocking(move || {
        comparison::compare(&solver, &appliances, &baseline, &prices, cap)
    })
    .await
    .context("solver task panicked")??;

    info!(
        baseline_cost = result.naive_cost,
        optimized_cost = result.optimized_cost,
        savings = result.savings,
        "optimization finished"
    );
    println!("{}", report::render_report(&result, &prices_for_report));

    if cfg.runlog.enabled {
        let store = JsonlRunStore::new(&cfg.runlog.path);
        store.append(&RunRecord::from_comparison(&result))?;
        info!(path = %store.path().display(), "run logged");
    }

    Ok(())
}
