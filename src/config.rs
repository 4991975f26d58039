use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub port: u16,
    pub storage: Storage,
    pub limits: Limits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    pub kind: StorageKind,
    /// Required only when `kind` is `database`.
    pub database: Option<Database>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Database,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Limits {
    pub max_content_size: usize,
}

impl Config {
    /// Load configuration from a TOML file (optional) overlaid with
    /// `SHAREBIN`-prefixed environment variables.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("SHAREBIN").separator("__"))
            .build()
            .context("failed to read config")?
            .try_deserialize()
            .context("failed to deserialize config")
    }
}
