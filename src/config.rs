use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use crate::store::CascadePolicy;

pub const DEFAULT_PORT: u16 = 3003;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogConfig {
    pub bind: Option<IpAddr>,
    pub port: Option<u16>,
    /// Load the seed records on startup
    pub seed: Option<bool>,
    pub cascade: Option<CascadePolicy>,
}

impl CatalogConfig {
    /// Config written by `init`, with every default spelled out
    pub fn with_defaults() -> Self {
        Self {
            bind: Some(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: Some(DEFAULT_PORT),
            seed: Some(true),
            cascade: Some(CascadePolicy::default()),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    pub fn seed(&self) -> bool {
        self.seed.unwrap_or(true)
    }

    pub fn cascade(&self) -> CascadePolicy {
        self.cascade.unwrap_or_default()
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("recipe-catalog.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<CatalogConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: CatalogConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &CatalogConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
