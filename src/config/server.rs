use crate::config::parse_var;
use crate::core::Result;
use std::env;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16, workers: usize) -> Self {
        Self {
            host,
            port,
            workers,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            parse_var("SERVER_PORT", "8080")?,
            parse_var("SERVER_WORKERS", "4")?,
        ))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
