//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI arguments, `GEOJSON_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{Srid, SridValidationError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9292;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_PAYLOAD_LIMIT: usize = 1024 * 1024;

/// Settings values that parse but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `default_srid` is outside the range PostGIS accepts.
    #[error("invalid default SRID: {0}")]
    DefaultSrid(#[from] SridValidationError),
}

/// Settings for the geometry service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GEOJSON")]
pub struct AppSettings {
    /// PostgreSQL connection string for the PostGIS point store.
    pub database_url: Option<String>,
    /// Address to listen on.
    pub host: Option<String>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// SRID applied to request bodies without an `srid` member.
    pub default_srid: Option<i64>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Largest accepted request body in bytes.
    pub payload_limit: Option<usize>,
    /// Remove every stored point before serving.
    #[ortho_config(default = false)]
    pub reset_on_startup: bool,
}

impl AppSettings {
    /// Connection string, required to start the server.
    ///
    /// # Errors
    /// Returns an error naming the variable to set when no URL is configured.
    pub fn database_url(&self) -> Result<&str, std::io::Error> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                std::io::Error::other("GEOJSON_DATABASE_URL must name the PostGIS database")
            })
    }

    /// Host and port to bind, as accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Default SRID, validated.
    ///
    /// # Errors
    /// Returns [`SettingsError::DefaultSrid`] when the configured value is
    /// out of range.
    pub fn default_srid(&self) -> Result<Srid, SettingsError> {
        match self.default_srid {
            Some(value) => Ok(Srid::new(value)?),
            None => Ok(Srid::default()),
        }
    }

    /// Pool size cap, defaulting to ten connections.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Request body limit in bytes, defaulting to 1 MiB.
    pub fn payload_limit(&self) -> usize {
        self.payload_limit.unwrap_or(DEFAULT_PAYLOAD_LIMIT)
    }
}
