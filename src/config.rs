//! Runtime configuration

use std::sync::Arc;
use std::time::Duration;

use crate::error::ConfigError;
use crate::source::{HttpItemSource, ItemSource, StaticItemSource};

/// Environment variable consulted when no URL is given on the command line
pub const URL_ENV: &str = "ITEMFLOW_URL";

/// Where items come from
#[derive(Clone, Debug, PartialEq)]
pub enum SourceConfig {
    Http { url: String, field: Option<String> },
    Offline { items: Vec<String> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub source: SourceConfig,
    /// Number of load triggers dispatched at startup
    pub requests: usize,
    /// Per-request fetch timeout
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.requests == 0 {
            return Err(ConfigError::NoRequests);
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::ZeroTimeout);
        }
        if let SourceConfig::Http { url, .. } = &self.source {
            reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Build the injected fetch capability
    pub fn build_source(&self) -> Arc<dyn ItemSource> {
        match &self.source {
            SourceConfig::Http { url, field } => {
                let source = HttpItemSource::new(url.clone());
                match field {
                    Some(field) => Arc::new(source.with_field(field.clone())),
                    None => Arc::new(source),
                }
            }
            SourceConfig::Offline { items } => Arc::new(StaticItemSource::items(items.clone())),
        }
    }
}
