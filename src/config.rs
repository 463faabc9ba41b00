use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    /// When unset the service runs against the in-memory backend.
    pub database_url: Option<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").ok(),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "dev_secret_key_change_in_production".to_string()),
            ),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            database_url: None,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5001,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.web_server_host.is_empty());
        assert!(config.web_server_port > 0);
    }

    #[test]
    fn test_test_config_uses_in_memory_backend() {
        let config = Config::test_config();

        assert!(config.database_url.is_none());
        assert_eq!(config.web_server_port, 5001);
    }
}
