use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use crate::handler::HandlerContext;

const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub model_name: String,
    pub model_version: String,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same parsing as [`AppConfig::from_env`] over an arbitrary lookup.
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("SERVER_ADDR")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080));

        let model_name = lookup("MODEL_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "text_predictor".to_string());
        let model_version = lookup("MODEL_VERSION").unwrap_or_else(|| "1.0".to_string());

        let max_body_bytes = lookup("MAX_BODY_BYTES")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        Ok(Self {
            listen_addr,
            model_name,
            model_version,
            max_body_bytes,
        })
    }

    pub fn handler_context(&self) -> HandlerContext {
        HandlerContext {
            model_name: self.model_name.clone(),
            model_version: self.model_version.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080),
            model_name: "text_predictor".to_string(),
            model_version: "1.0".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
