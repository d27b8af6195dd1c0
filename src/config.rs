use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub telemetry: TelemetryConfig,
    pub surrealdb: SurrealDbConfig,
    pub hashing: HashingConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
}

/// Spans are only exported when an OTLP collector endpoint is set.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct TelemetryConfig {
    pub otlp_endpoint: Option<String>,
}

/// `endpoint` accepts any scheme understood by `surrealdb::engine::any`,
/// e.g. `ws://localhost:8000` or `mem://`. Root sign-in is skipped when
/// `username` is empty.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
}

/// Argon2id cost parameters. `cost` is the number of passes over memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    pub cost: u32,
    pub memory_kib: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        HashingConfig {
            cost: argon2::Params::DEFAULT_T_COST,
            memory_kib: argon2::Params::DEFAULT_M_COST,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "leads-auth".to_string(),
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3001,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            telemetry: TelemetryConfig::default(),
            surrealdb: SurrealDbConfig {
                endpoint: "ws://localhost:8000".to_string(),
                username: "root".to_string(),
                password: "root".to_string(),
                namespace: "leads".to_string(),
                database: "auth".to_string(),
            },
            hashing: HashingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
    }
}
