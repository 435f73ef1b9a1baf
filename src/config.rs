use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_UPSTREAM_URL: &str = "https://platform.saleassist.ai/api/meetings/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub upstream: UpstreamConfig,
    pub landing: LandingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Where meeting calls are relayed to, and the static credentials sent with each one
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LandingConfig {
    /// Port number advertised on the landing page
    pub port: u16,
}

impl Config {
    /// Load from an optional file at `path`, overridden by `RELAY__*` env vars
    ///
    /// `upstream.api_key` and `upstream.api_secret` have no default.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "meeting-relay")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 8002_i64)?
            .set_default("upstream.base_url", DEFAULT_UPSTREAM_URL)?
            .set_default("landing.port", 8002_i64)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("RELAY").separator("__"))
            .build()
            .with_context(|| format!("Failed to read config from {}", path))?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }
}
