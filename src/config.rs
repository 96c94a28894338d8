use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

/// Which route table a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Read-only endpoints over the fake item list
    Read,
    /// Request-body endpoints
    Write,
}

impl FromStr for ServiceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(ServiceKind::Read),
            "write" => Ok(ServiceKind::Write),
            other => bail!("expected 'read' or 'write', got '{}'", other),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Read => f.write_str("read"),
            ServiceKind::Write => f.write_str("write"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service_kind: ServiceKind,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_kind = lookup("SERVICE_KIND")
            .unwrap_or_else(|| "read".to_string())
            .parse::<ServiceKind>()
            .context("SERVICE_KIND must be 'read' or 'write'")?;

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            service_kind,
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service kind: {}", self.service_kind);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
