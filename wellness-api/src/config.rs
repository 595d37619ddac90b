use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wellness_core::owner::DEFAULT_OWNER_ID;
use wellness_core::OwnerId;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub owner: OwnerConfig,
    pub cors: Option<CorsConfig>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Supabase,
    Memory,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OwnerConfig {
    pub id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            store: StoreConfig {
                backend: StoreBackend::Supabase,
                url: None,
                anon_key: None,
                timeout_secs: 30,
            },
            owner: OwnerConfig {
                id: DEFAULT_OWNER_ID.to_string(),
            },
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8080

[store]
backend = "supabase"   # Options: supabase, memory
# url = "https://your-project.supabase.co"
# anon_key = "your-anon-key"
timeout_secs = 30

[owner]
id = "550e8400-e29b-41d4-a716-446655440000"

[cors]
allowed_origins = ["http://localhost:3000"]

[logging]
level = "info"
"#;

impl ApiConfig {
    /// Load configuration from `path`, or from the per-user config file
    /// (created with defaults on first run). Environment variables prefixed
    /// `WELLNESS__` override file values, e.g. `WELLNESS__SERVER__PORT`;
    /// `SUPABASE_URL` and `SUPABASE_ANON_KEY` fill the store section.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = get_config_path();
                write_default_config(&default_path)?;
                default_path
            }
        };

        let defaults = Self::default();
        let builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port as i64)?
            .set_default("store.backend", "supabase")?
            .set_default("store.timeout_secs", defaults.store.timeout_secs as i64)?
            .set_default("owner.id", defaults.owner.id)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(File::from(config_path.clone()))
            .add_source(
                Environment::with_prefix("WELLNESS")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("store.url", std::env::var("SUPABASE_URL").ok())?
            .set_override_option("store.anon_key", std::env::var("SUPABASE_ANON_KEY").ok())?
            .build()?;

        let config: ApiConfig = builder.try_deserialize()?;
        config.owner_id()?;

        Ok((config, config_path))
    }

    pub fn owner_id(&self) -> Result<OwnerId, ConfigError> {
        self.owner
            .id
            .parse()
            .map_err(|e| ConfigError::Message(format!("Invalid owner.id \"{}\": {e}", self.owner.id)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn write_default_config(config_path: &Path) -> Result<(), ConfigError> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("wellness/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "0.0.0.0"
port = 9090

[store]
backend = "memory"

[owner]
id = "6f9619ff-8b86-d011-b42d-00c04fc964ff"
"#
        )
        .unwrap();

        let (config, path) = ApiConfig::load(Some(file.path())).unwrap();
        assert_eq!(path, file.path());
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.owner_id().unwrap().to_string(),
            "6f9619ff-8b86-d011-b42d-00c04fc964ff"
        );
    }

    #[test]
    fn test_invalid_owner_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[owner]\nid = \"me\"").unwrap();

        assert!(ApiConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_default_config_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wellness/api.toml");
        write_default_config(&path).unwrap();

        let (config, _) = ApiConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.owner.id, DEFAULT_OWNER_ID);
        assert_eq!(
            config.cors.unwrap().allowed_origins,
            vec!["http://localhost:3000".to_string()]
        );
    }
}
