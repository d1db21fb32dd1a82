use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::{
    connectors::{connection::Connection, http::HttpConnection},
    retention::RetentionPolicy,
};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const TRUE_TOKENS: &[&str] = &["1", "true", "yes", "y", "on"];
const FALSE_TOKENS: &[&str] = &["", "0", "false", "no", "n", "off"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid toggle {0:?}, expected one of true/false, yes/no, y/n, on/off, 1/0")]
    InvalidToggle(String),
    #[error("cluster url {0} cannot have index names appended to it")]
    CannotBeABase(Url),
}

/// Parses an on/off switch such as `ALLOW_DELETE`. Case-insensitive, surrounding
/// whitespace ignored.
pub fn parse_toggle(value: &str) -> Result<bool, ConfigError> {
    let normalized = value.trim().to_ascii_lowercase();
    if TRUE_TOKENS.contains(&normalized.as_str()) {
        Ok(true)
    } else if FALSE_TOKENS.contains(&normalized.as_str()) {
        Ok(false)
    } else {
        Err(ConfigError::InvalidToggle(value.to_string()))
    }
}

#[derive(Clone, Debug, bon::Builder)]
pub struct Configuration {
    cluster: Url,
    #[builder(default)]
    policy: RetentionPolicy,
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    request_timeout: Duration,
}

impl Configuration {
    pub fn new(cluster: Url, policy: RetentionPolicy) -> Result<Configuration, ConfigError> {
        let config = Configuration::builder()
            .cluster(cluster)
            .policy(policy)
            .build();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cluster.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(self.cluster.clone()));
        }
        Ok(())
    }

    pub fn cluster(&self) -> &Url {
        &self.cluster
    }

    pub fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn connection(&self) -> anyhow::Result<Connection> {
        self.validate()?;
        let http = HttpConnection::new(self.cluster.clone(), self.request_timeout)?;
        Ok(Connection::Http(http))
    }
}
