//! Server configuration
//!
//! Sources, later ones overriding earlier ones:
//!
//! | Source | Example |
//! |--------|---------|
//! | built-in defaults | `bind_address = "0.0.0.0:5000"` |
//! | optional `gym.{toml,yaml,json}` in the working directory | `database_path = "/var/lib/gym/gym.db"` |
//! | `GYM_*` environment variables | `GYM_UPLOAD_DIR=/srv/gym/static` |

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_path: String,
    /// Directory served under `/static`
    pub upload_dir: PathBuf,
    pub max_connections: u32,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::from_builder(config::Config::builder().add_source(
            config::File::with_name("gym").required(false),
        ))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        let settings = builder
            .add_source(config::Environment::with_prefix("GYM"))
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("database_path", "data/gym.db")?
            .set_default("upload_dir", "static")?
            .set_default("max_connections", 5)?
            .build()
            .context("Failed to read configuration sources")?;

        settings
            .try_deserialize()
            .context("Invalid server configuration")
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_upload_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create upload directory {}",
                    self.upload_dir.display()
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_builder(config::Config::builder()).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.database_path, "data/gym.db");
        assert_eq!(config.upload_dir, PathBuf::from("static"));
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_explicit_source_overrides_defaults() {
        let builder = config::Config::builder()
            .set_override("database_path", "/tmp/other.db")
            .unwrap()
            .set_override("max_connections", 2)
            .unwrap();

        let config = ServerConfig::from_builder(builder).unwrap();
        assert_eq!(config.database_path, "/tmp/other.db");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.bind_address, "0.0.0.0:5000");
    }

    #[tokio::test]
    async fn test_ensure_upload_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::from_builder(config::Config::builder()).unwrap();
        config.upload_dir = dir.path().join("static");

        config.ensure_upload_dir().await.unwrap();
        assert!(config.upload_dir.is_dir());
    }
}
