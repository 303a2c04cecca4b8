//! Validated server settings.

use std::time::Duration;

use crate::config::duration::parse_duration;
use crate::config::schema::ServerConfig;
use crate::config::validation::ValidationError;

/// Server settings with every value checked and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address as configured (`":8080"`, `"127.0.0.1:9000"`, ...).
    pub listen_address: String,

    /// Request read timeout. `None` when configured as zero or negative.
    pub read_timeout: Option<Duration>,

    /// Request handling timeout. `None` when configured as zero or negative.
    pub write_timeout: Option<Duration>,
}

impl ServerSettings {
    /// Check and convert `config`.
    ///
    /// Fields are checked in order (read timeout, write timeout, address)
    /// and the first problem is returned.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ValidationError> {
        let read_timeout = timeout("server.readTimeout", &config.read_timeout)?;
        let write_timeout = timeout("server.writeTimeout", &config.write_timeout)?;
        check_listen_address("server.port", &config.port)?;

        Ok(Self {
            listen_address: config.port.clone(),
            read_timeout,
            write_timeout,
        })
    }

    /// Address to hand to the socket layer. An empty host (`":8080"`)
    /// means all interfaces.
    pub fn bind_address(&self) -> String {
        match self.listen_address.strip_prefix(':') {
            Some(port) => format!("0.0.0.0:{port}"),
            None => self.listen_address.clone(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_address: crate::config::schema::DEFAULT_PORT.to_string(),
            read_timeout: Some(Duration::from_secs(60)),
            write_timeout: Some(Duration::from_secs(60)),
        }
    }
}

fn timeout(key: &'static str, value: &str) -> Result<Option<Duration>, ValidationError> {
    let duration = parse_duration(value).map_err(|source| ValidationError::InvalidDuration {
        key,
        value: value.to_string(),
        source,
    })?;
    Ok((!duration.is_zero()).then_some(duration))
}

/// `host:port` or `:port` with a numeric port.
pub(crate) fn check_listen_address(key: &'static str, value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidAddress {
        key,
        value: value.to_string(),
    };

    let (_, port) = value.rsplit_once(':').ok_or_else(invalid)?;
    port.parse::<u16>().map_err(|_| invalid())?;
    Ok(())
}
