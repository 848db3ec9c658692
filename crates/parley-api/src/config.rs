use config::{Config as ConfigLoader, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub mongodb: MongoDbConfig,
    pub logging: LoggingConfig,
    
    // Secrets (from ENV only)
    #[serde(default)]
    pub mongo_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoDbConfig {
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from defaults, TOML files and environment variables
    /// 
    /// Hierarchy (weakest to strongest):
    /// 1. Built-in defaults
    /// 2. config/default.toml
    /// 3. config/{ENV}.toml (if ENV is set)
    /// 4. Environment variables, e.g. PARLEY_SERVER__HOST or PARLEY_CORS__ORIGINS=a,b
    /// 5. PORT, which overrides server.port
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::vars().collect())
    }
    
    /// Same as [`Config::load`], reading variables from `vars` instead of the process
    pub fn load_from(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let env = vars.get("ENV").cloned().unwrap_or_else(|| "dev".to_string());
        let port = port_override(vars.get("PORT").cloned())?;
        let mongo_uri = require_mongo_uri(vars.get("MONGO_URI").cloned())?;
        
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("PARLEY")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.origins")
                    .try_parsing(true)
                    .source(Some(vars))
            )
            .set_override_option("server.port", port.map(i64::from))?;
        
        let config = builder.build()?;
        
        let mut cfg: Config = config.try_deserialize()?;
        
        // Secrets come from the environment only
        cfg.mongo_uri = mongo_uri;
        
        Ok(cfg)
    }
    
    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::from(path.as_ref()));
        
        let config = builder.build()?;
        config.try_deserialize()
    }
    
    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("cors.enabled", true)?
            .set_default("cors.origins", vec!["*"])?
            .set_default("mongodb.database", "chatdb")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")
    }
    
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            cors: CorsConfig {
                enabled: true,
                origins: vec!["*".to_string()],
            },
            mongodb: MongoDbConfig {
                database: "chatdb".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
            mongo_uri: String::new(),
        }
    }
}

/// An unset or blank PORT keeps the configured port
fn port_override(value: Option<String>) -> Result<Option<u16>, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(port) => port
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::Message(format!("Invalid PORT {:?}: {}", port, e))),
    }
}

fn require_mongo_uri(value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|uri| !uri.trim().is_empty())
        .ok_or_else(|| ConfigError::Message("MONGO_URI environment variable is required".to_string()))
}
