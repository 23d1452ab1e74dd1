use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_SITE_ROOT: &str = "target/site";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct Config {
    /// URL prefix the application is served under; empty means the root.
    pub base_url: String,
    pub site_root: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| dotenvy::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            base_url: var("BASE_URL").unwrap_or_default(),
            site_root: var("SITE_ROOT")
                .unwrap_or_else(|| DEFAULT_SITE_ROOT.to_string())
                .into(),
            bind_addr: var("BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
                .parse()
                .context("BIND_ADDR must be a socket address like 0.0.0.0:3000")?,
        })
    }
}
