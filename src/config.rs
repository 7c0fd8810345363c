use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// Whether 500 bodies carry the failure category and message.
    pub expose_internal_errors: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let db_max_connections: u32 = env_or("PORTFOLIO_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_DB_MAX_CONNECTIONS: {e}"))?;

        let host: IpAddr = env_or("PORTFOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_HOST: {e}"))?;

        let port: u16 = env_or("PORTFOLIO_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_PORT: {e}"))?;

        let log_level = env_or("PORTFOLIO_LOG_LEVEL", "info");

        let expose_internal_errors = parse_bool(
            "PORTFOLIO_EXPOSE_INTERNAL_ERRORS",
            &env_or("PORTFOLIO_EXPOSE_INTERNAL_ERRORS", "true"),
        )?;

        Ok(Config {
            database_url,
            db_max_connections,
            host,
            port,
            log_level,
            expose_internal_errors,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            db_max_connections: 10,
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            log_level: "info".to_string(),
            expose_internal_errors: true,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("Invalid {key}: expected a boolean, got '{other}'")),
    }
}
