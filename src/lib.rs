pub mod comparison;
pub mod config;
pub mod domain;
pub mod forecast;
pub mod ingest;
pub mod optimizer;
pub mod projection;
pub mod report;
pub mod runlog;
pub mod sources;
pub mod telemetry;
