use serde::Deserialize;
use std::net::SocketAddr;

use crate::store::UserStore;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub resources: ResourcesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Filesystem locations: the public asset directory and the name of the
/// result page the form endpoints overwrite inside it.
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    pub static_dir: String,
    pub result_file: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "UserRegistry/0.1")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("resources.static_dir", "public")?
            .set_default("resources.result_file", "result.html")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state: the loaded configuration and the user store.
///
/// The store lives here rather than in a global so handlers receive it by
/// injection and tests can build isolated instances.
pub struct AppState {
    pub config: Config,
    pub store: UserStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: UserStore::new(),
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;

    /// Default configuration with an overridable static directory.
    pub fn test_config(static_dir: &str) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                show_headers: false,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            http: HttpConfig {
                server_name: "UserRegistry/0.1".to_string(),
                enable_cors: true,
                max_body_size: 1_048_576,
            },
            resources: ResourcesConfig {
                static_dir: static_dir.to_string(),
                result_file: "result.html".to_string(),
            },
        }
    }

    pub fn test_state(static_dir: &str) -> AppState {
        AppState::new(test_config(static_dir))
    }
}
