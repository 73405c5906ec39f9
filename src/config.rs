//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables. The binary applies CLI flags last.
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 4000
//! graphql_path = "/graphql"
//! graphiql = true
//! update_semantics = "presence"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::store::UpdateSemantics;

/// Listen port variable.
pub const ENV_PORT: &str = "PORT";
/// Listen host variable.
pub const ENV_HOST: &str = "ROSTER_HOST";
/// `presence` or `truthy`.
pub const ENV_UPDATE_SEMANTICS: &str = "ROSTER_UPDATE_SEMANTICS";

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to bind to (default: 3000)
    pub port: u16,
    /// Path the GraphQL endpoint is mounted at (default: "/graphql")
    pub graphql_path: String,
    /// Serve the GraphiQL explorer on GET (default: true)
    pub graphiql: bool,
    /// How `updatePerson` treats optional arguments
    pub update_semantics: UpdateSemantics,
}

/// Values set on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub graphiql: Option<bool>,
    pub update_semantics: Option<UpdateSemantics>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            graphql_path: "/graphql".to_string(),
            graphiql: true,
            update_semantics: UpdateSemantics::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults, overlaid with `path` (if given) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`ServerConfig::load`], reading environment variables through `lookup`.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Apply command-line flags, the last and strongest layer.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> Result<()> {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(graphiql) = overrides.graphiql {
            self.graphiql = graphiql;
        }
        if let Some(semantics) = overrides.update_semantics {
            self.update_semantics = semantics;
        }
        self.validate()
    }

    /// Read a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| RosterError::Config(format!("toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables, looked up through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| RosterError::Config(format!("{}: invalid port '{}'", ENV_PORT, port)))?;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(semantics) = lookup(ENV_UPDATE_SEMANTICS) {
            self.update_semantics = semantics
                .parse()
                .map_err(|e| RosterError::Config(format!("{}: {}", ENV_UPDATE_SEMANTICS, e)))?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.graphql_path.starts_with('/') {
            return Err(RosterError::Config(format!(
                "graphql_path must start with '/', got '{}'",
                self.graphql_path
            )));
        }
        if self.host.trim().is_empty() {
            return Err(RosterError::Config("host must not be empty".to_string()));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
