use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// MongoDB connection string. Secret, so it is only ever read from the
    /// environment (`API_DATABASE_URI`), never from `config.toml`.
    pub uri: String,
    /// Database to open on the server.
    pub name: String,
    pub pool_size: u32,
    pub server_selection_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let _ = dotenvy::dotenv();

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config"))
            .add_source(config::Environment::separator(
                config::Environment::with_prefix("API"),
                "_",
            ))
            .build()?;

        settings.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
