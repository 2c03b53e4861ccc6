//! Application configuration module
//!
//! Configuration comes from environment variables (a `.env` file is loaded by
//! the binary first). Tests build it directly through [`AppConfigBuilder`].

use std::time::Duration;
use thiserror::Error;

/// Minimum length of `SECRET_KEY`; the cookie signing key is derived from it.
pub const MIN_SECRET_LEN: usize = 32;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the server binds to
    pub host: String,
    /// Port the server listens on
    pub port: u16,
    /// sqlx connection string, e.g. `sqlite://database.db?mode=rwc`
    pub database_url: String,
    /// Secret for JWT signing and session cookie signing
    pub secret_key: String,
    /// Lifetime of the access token and of its cookie
    pub token_ttl: Duration,
    /// Whether the access token cookie carries the `Secure` attribute
    pub cookie_secure: bool,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(host) = lookup("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port(parse_var("SERVER_PORT", &port)?);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("SECRET_KEY") {
            builder = builder.secret_key(secret);
        }
        if let Some(minutes) = lookup("TOKEN_TTL_MINUTES") {
            let parsed: u64 = parse_var("TOKEN_TTL_MINUTES", &minutes)?;
            let secs = parsed.checked_mul(60).ok_or(ConfigError::InvalidValue {
                name: "TOKEN_TTL_MINUTES",
                value: minutes.clone(),
            })?;
            builder = builder.token_ttl(Duration::from_secs(secs));
        }
        if let Some(secure) = lookup("COOKIE_SECURE") {
            builder = builder.cookie_secure(parse_var("COOKIE_SECURE", &secure)?);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &cost)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort(MIN_SECRET_LEN));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "TOKEN_TTL_MINUTES",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// `host:port` string for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    host: String,
    port: u16,
    database_url: String,
    secret_key: Option<String>,
    token_ttl: Duration,
    cookie_secure: bool,
    bcrypt_cost: u32,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            database_url: "sqlite://database.db?mode=rwc".to_string(),
            secret_key: None,
            token_ttl: Duration::from_secs(30 * 60),
            cookie_secure: true,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AppConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn secret_key(mut self, secret: impl Into<String>) -> Self {
        self.secret_key = Some(secret.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            host: self.host,
            port: self.port,
            database_url: self.database_url,
            secret_key: self
                .secret_key
                .ok_or(ConfigError::MissingValue("SECRET_KEY"))?,
            token_ttl: self.token_ttl,
            cookie_secure: self.cookie_secure,
            bcrypt_cost: self.bcrypt_cost,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("SECRET_KEY must be at least {0} bytes long")]
    SecretTooShort(usize),
}
