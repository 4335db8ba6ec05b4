use std::error::Error;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,sqlx=warn,tower_http=info";

/// Where log lines go. Loki shipping only happens when the `loki` feature
/// is compiled in and `LOKI_ENABLED=true`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: String,
    pub service_name: String,
    pub environment: String,
    pub loki_enabled: bool,
    pub loki_url: Option<String>,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            filter: env_or("RUST_LOG", DEFAULT_FILTER),
            service_name: env_or("SERVICE_NAME", "ticker-portfolio"),
            environment: env_or("ENVIRONMENT", "development"),
            loki_enabled: std::env::var("LOKI_ENABLED").is_ok_and(|v| v.eq_ignore_ascii_case("true")),
            loki_url: std::env::var("LOKI_URL").ok().filter(|url| !url.is_empty()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.loki_enabled && self.loki_url.is_none() {
            return Err("LOKI_ENABLED is true but LOKI_URL is not set".to_string());
        }
        Ok(())
    }
}

/// Installs the global subscriber: env filter, console output and, when
/// configured, the Loki layer.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    #[cfg(feature = "loki")]
    let loki = loki_layer(config)?;
    #[cfg(not(feature = "loki"))]
    let loki: Option<tracing_subscriber::layer::Identity> = None;
    let shipping = loki.is_some();

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.filter))
        .with(fmt::layer())
        .with(loki)
        .try_init()?;

    tracing::info!(
        service = %config.service_name,
        environment = %config.environment,
        loki = shipping,
        "Logging initialized"
    );
    Ok(())
}

#[cfg(feature = "loki")]
fn loki_layer(config: &LoggingConfig) -> Result<Option<tracing_loki::Layer>, Box<dyn Error>> {
    let Some(url) = config.loki_url.as_deref().filter(|_| config.loki_enabled) else {
        return Ok(None);
    };

    let (layer, task) = tracing_loki::builder()
        .label("service", config.service_name.as_str())?
        .label("environment", config.environment.as_str())?
        .build_url(url::Url::parse(url)?)?;
    // Pushes batched events in the background.
    tokio::spawn(task);
    Ok(Some(layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(loki_enabled: bool, loki_url: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            filter: "info".into(),
            service_name: "ticker-portfolio".into(),
            environment: "test".into(),
            loki_enabled,
            loki_url: loki_url.map(str::to_string),
        }
    }

    #[test]
    fn loki_requires_url() {
        assert!(config(true, None).validate().is_err());
        assert!(config(true, Some("http://localhost:3100")).validate().is_ok());
        assert!(config(false, None).validate().is_ok());
    }
}
