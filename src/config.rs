use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use wsid_suggestion::{MAX_CANDIDATES, ScoringWeights};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub suggestion: SuggestionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_days: u64,
    /// Marks the session cookie `Secure`; enable behind HTTPS.
    #[serde(default)]
    pub secure_cookie: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionConfig {
    #[serde(default = "default_suggestion_count")]
    pub default_count: usize,
    #[serde(default = "default_liked_weight")]
    pub liked_weight: f64,
    #[serde(default = "default_disliked_weight")]
    pub disliked_weight: f64,
    #[serde(default = "default_jitter")]
    pub jitter: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            default_count: default_suggestion_count(),
            liked_weight: default_liked_weight(),
            disliked_weight: default_disliked_weight(),
            jitter: default_jitter(),
        }
    }
}

impl SuggestionConfig {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            liked: self.liked_weight,
            disliked: self.disliked_weight,
            jitter: self.jitter,
        }
    }
}

fn default_suggestion_count() -> usize {
    6
}

fn default_liked_weight() -> f64 {
    ScoringWeights::default().liked
}

fn default_disliked_weight() -> f64 {
    ScoringWeights::default().disliked
}

fn default_jitter() -> f64 {
    ScoringWeights::default().jitter
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (DATABASE_URL, JWT_SECRET)
    /// 2. Environment variables (WSID__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:wsid.db")?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.expiration_days", 7)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WSID")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(jwt_secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("jwt.secret", jwt_secret)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt.secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }
        if self.jwt.expiration_days < 1 {
            return Err("JWT expiration_days must be at least 1".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !(1..=MAX_CANDIDATES).contains(&self.suggestion.default_count) {
            return Err(format!(
                "Suggestion default_count must be between 1 and {MAX_CANDIDATES}"
            ));
        }
        self.suggestion.weights().validate()?;

        Ok(())
    }
}
