use crate::domain::granularity::Granularity;
use crate::domain::theme::Theme;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct MonitorConfig {
    pub server: ServerSettings,
    pub session: SessionSettings,
    pub reports: ReportSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub tick_interval_ms: u64,
    /// Seeds the sample generator for reproducible runs.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    pub time_range: String,
    pub theme: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportSettings {
    pub output_dir: PathBuf,
}

impl MonitorConfig {
    pub fn bind_address(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        Ok(addr.parse()?)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.session.tick_interval_ms.max(1))
    }

    pub fn time_range(&self) -> anyhow::Result<Granularity> {
        Ok(self.session.time_range.parse()?)
    }

    pub fn theme(&self) -> anyhow::Result<Theme> {
        Ok(self.session.theme.parse()?)
    }
}

/// Defaults, then `config/monitor.{toml,...}` if present, then `VITALS__*` environment variables.
pub fn load_monitor_config() -> anyhow::Result<MonitorConfig> {
    let settings = base_builder()?
        .add_source(config::File::with_name("config/monitor").required(false))
        .add_source(config::Environment::with_prefix("VITALS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn base_builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("session.tick_interval_ms", 1000)?
        .set_default("session.time_range", "daily")?
        .set_default("session.theme", "light")?
        .set_default("reports.output_dir", "reports")?)
}
