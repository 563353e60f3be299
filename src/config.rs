use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub seed_dir: PathBuf,
    pub seed_on_startup: bool,
    pub enforce_foreign_keys: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let seed_dir = env::var("SEED_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let seed_on_startup = flag("SEED_ON_STARTUP", env::var("SEED_ON_STARTUP").ok(), true)?;
        let enforce_foreign_keys = flag(
            "ENFORCE_FOREIGN_KEYS",
            env::var("ENFORCE_FOREIGN_KEYS").ok(),
            false,
        )?;
        Ok(Self {
            port,
            database_url,
            host,
            seed_dir,
            seed_on_startup,
            enforce_foreign_keys,
        })
    }

    /// In-memory configuration used by tests and throwaway runs.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            seed_dir: PathBuf::from("data"),
            seed_on_startup: false,
            enforce_foreign_keys: false,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

fn flag(name: &str, raw: Option<String>, default: bool) -> anyhow::Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("{name} must be a boolean, got {other:?}")),
    }
}
