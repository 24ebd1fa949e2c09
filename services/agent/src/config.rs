use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Defines the supported OpenAI-compatible reply providers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyProvider {
    Groq,
    OpenAI,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub provider: ReplyProvider,
    pub groq_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub chat_model: String,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let provider_str = std::env::var("REPLY_PROVIDER").unwrap_or_else(|_| "groq".to_string());
        let provider = match provider_str.to_lowercase().as_str() {
            "openai" => ReplyProvider::OpenAI,
            _ => ReplyProvider::Groq,
        };

        let groq_api_key = std::env::var("GROQ_API_KEY").ok();
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();

        let chat_model =
            std::env::var("CHAT_MODEL").unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string());

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        match provider {
            ReplyProvider::Groq => {
                if groq_api_key.is_none() {
                    return Err(ConfigError::MissingVar(
                        "GROQ_API_KEY must be set for 'groq' provider".to_string(),
                    ));
                }
            }
            ReplyProvider::OpenAI => {
                if openai_api_key.is_none() {
                    return Err(ConfigError::MissingVar(
                        "OPENAI_API_KEY must be set for 'openai' provider".to_string(),
                    ));
                }
            }
        }

        Ok(Self {
            bind_address,
            provider,
            groq_api_key,
            openai_api_key,
            chat_model,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tracing::Level;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("BIND_ADDRESS");
            env::remove_var("REPLY_PROVIDER");
            env::remove_var("GROQ_API_KEY");
            env::remove_var("OPENAI_API_KEY");
            env::remove_var("CHAT_MODEL");
            env::remove_var("RUST_LOG");
        }
    }

    fn set_minimal_env_groq() {
        unsafe {
            env::set_var("REPLY_PROVIDER", "groq");
            env::set_var("GROQ_API_KEY", "test-groq-key");
        }
    }

    #[test]
    fn test_config_error_display() {
        let missing_var = ConfigError::MissingVar("TEST_VAR".to_string());
        assert_eq!(
            format!("{}", missing_var),
            "Missing environment variable: TEST_VAR"
        );

        let invalid_value =
            ConfigError::InvalidValue("TEST_VAR".to_string(), "bad_value".to_string());
        assert_eq!(
            format!("{}", invalid_value),
            "Invalid value for environment variable TEST_VAR: bad_value"
        );
    }

    #[test]
    fn test_provider_debug_and_clone() {
        let groq = ReplyProvider::Groq;
        let openai = ReplyProvider::OpenAI;

        assert!(format!("{:?}", groq).contains("Groq"));
        assert!(format!("{:?}", openai).contains("OpenAI"));

        let cloned = groq.clone();
        assert_eq!(groq, cloned);
    }

    #[test]
    #[serial]
    fn test_config_from_env_minimal_groq() {
        clear_env_vars();
        set_minimal_env_groq();

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert_eq!(config.provider, ReplyProvider::Groq);
        assert_eq!(config.groq_api_key, Some("test-groq-key".to_string()));
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.chat_model, "llama-3.3-70b-versatile");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults_to_groq() {
        clear_env_vars();
        unsafe {
            env::set_var("GROQ_API_KEY", "test-groq-key");
        }

        let config = Config::from_env().expect("Config should load successfully");
        assert_eq!(config.provider, ReplyProvider::Groq);
    }

    #[test]
    #[serial]
    fn test_config_from_env_openai_provider() {
        clear_env_vars();
        unsafe {
            env::set_var("REPLY_PROVIDER", "openai");
            env::set_var("OPENAI_API_KEY", "test-openai-key");
        }

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.provider, ReplyProvider::OpenAI);
        assert_eq!(config.openai_api_key, Some("test-openai-key".to_string()));
        assert_eq!(config.groq_api_key, None);
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_values() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
            env::set_var("REPLY_PROVIDER", "groq");
            env::set_var("GROQ_API_KEY", "custom-groq-key");
            env::set_var("CHAT_MODEL", "llama-3.1-8b-instant");
            env::set_var("RUST_LOG", "debug");
        }

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.groq_api_key, Some("custom-groq-key".to_string()));
        assert_eq!(config.chat_model, "llama-3.1-8b-instant");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    #[serial]
    fn test_config_invalid_bind_address() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "not-a-valid-address");
            env::set_var("GROQ_API_KEY", "test-groq-key");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "BIND_ADDRESS"),
            _ => panic!("Expected InvalidValue for BIND_ADDRESS"),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        clear_env_vars();
        unsafe {
            env::set_var("GROQ_API_KEY", "test-groq-key");
            env::set_var("RUST_LOG", "not-a-level");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "RUST_LOG"),
            _ => panic!("Expected InvalidValue for RUST_LOG"),
        }
    }

    #[test]
    #[serial]
    fn test_config_missing_groq_key() {
        clear_env_vars();
        unsafe {
            env::set_var("REPLY_PROVIDER", "groq");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::MissingVar(msg) => {
                assert!(msg.contains("GROQ_API_KEY"));
            }
            _ => panic!("Expected MissingVar for GROQ_API_KEY"),
        }
    }

    #[test]
    #[serial]
    fn test_config_missing_openai_key() {
        clear_env_vars();
        unsafe {
            env::set_var("REPLY_PROVIDER", "openai");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::MissingVar(msg) => {
                assert!(msg.contains("OPENAI_API_KEY"));
            }
            _ => panic!("Expected MissingVar for OPENAI_API_KEY"),
        }
    }
}
