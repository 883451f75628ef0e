use config::{self, ConfigError, Environment};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::utils::deserialize_config_list;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub commerce: CommerceServiceSettings,
    pub gateway: PaymentGatewaySettings,
    pub redis: RedisSettings,
    pub checkout: CheckoutSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    #[serde(deserialize_with = "deserialize_config_list", default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommerceServiceSettings {
    pub base_url: String,
    pub authorization_token: SecretString,
    pub timeout_milliseconds: u64,
}

impl CommerceServiceSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Debug, Deserialize)]
pub struct PaymentGatewaySettings {
    pub base_url: String,
    pub authorization_token: SecretString,
    pub timeout_milliseconds: u64,
}

impl PaymentGatewaySettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Debug, Deserialize)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    pub password: Option<SecretString>,
}

impl RedisSettings {
    pub fn get_string(&self) -> SecretString {
        match &self.password {
            Some(password) => format!(
                "redis://:{}@{}:{}",
                password.expose_secret(),
                self.host,
                self.port
            )
            .into(),
            None => format!("redis://{}:{}", self.host, self.port).into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckoutSettings {
    pub pending_ttl_secs: u64,
    pub redirect_delay_secs: u64,
}

impl CheckoutSettings {
    pub fn pending_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.pending_ttl_secs)
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");
    let builder = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("configuration.yaml"),
        ))
        .add_source(Environment::default().separator("__"))
        .build()?;
    builder.try_deserialize::<Settings>()
}
