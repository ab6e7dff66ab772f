use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!("Unknown MESSAGE_STORE '{}', expected postgres or memory", other)),
        }
    }
}

/// Where the bundled front end lives on disk and the URL prefix it is
/// served under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    pub dir: PathBuf,
    pub packs_url: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/packs"),
            packs_url: "/packs".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub assets: AssetConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("PORT") {
            Some(port) => port.parse().context("Invalid PORT")?,
            None => 8080,
        };
        let store = match lookup("MESSAGE_STORE") {
            Some(value) => StoreBackend::parse(&value)?,
            None => StoreBackend::Postgres,
        };
        let database_url = lookup("DATABASE_URL");

        if store == StoreBackend::Postgres && database_url.is_none() {
            return Err(anyhow!("DATABASE_URL must be set"));
        }

        let defaults = AssetConfig::default();
        let assets = AssetConfig {
            dir: lookup("ASSETS_DIR").map(PathBuf::from).unwrap_or(defaults.dir),
            packs_url: lookup("PACKS_URL").unwrap_or(defaults.packs_url),
        };

        if !assets.packs_url.starts_with('/') {
            return Err(anyhow!("PACKS_URL must start with '/'"));
        }

        Ok(Self {
            host,
            port,
            store,
            database_url,
            assets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let s = settings(&[("DATABASE_URL", "postgres://localhost/board")]).unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.port, 8080);
        assert_eq!(s.store, StoreBackend::Postgres);
        assert_eq!(s.assets, AssetConfig::default());
    }

    #[test]
    fn postgres_requires_database_url() {
        let err = settings(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL must be set"));
    }

    #[test]
    fn memory_store_needs_no_database() {
        let s = settings(&[("MESSAGE_STORE", "Memory"), ("PORT", "3000")]).unwrap();
        assert_eq!(s.store, StoreBackend::Memory);
        assert_eq!(s.port, 3000);
        assert!(s.database_url.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(settings(&[("MESSAGE_STORE", "memory"), ("PORT", "eighty")]).is_err());
        assert!(settings(&[("MESSAGE_STORE", "redis")]).is_err());
        assert!(settings(&[("MESSAGE_STORE", "memory"), ("PACKS_URL", "packs")]).is_err());
    }

    #[test]
    fn asset_overrides() {
        let s = settings(&[
            ("MESSAGE_STORE", "memory"),
            ("ASSETS_DIR", "/srv/board/packs"),
            ("PACKS_URL", "/static"),
        ])
        .unwrap();
        assert_eq!(s.assets.dir, PathBuf::from("/srv/board/packs"));
        assert_eq!(s.assets.packs_url, "/static");
    }
}
