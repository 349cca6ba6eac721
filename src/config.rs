use chrono::Duration;
use std::env;
use std::fmt;
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BCRYPT_COST: u32 = 10;
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365 * 10;

/// Why the process configuration could not be loaded.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or empty.
    Missing(&'static str),
    /// A variable is present but cannot be parsed.
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "{} has an invalid value: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Credentials of a user registered at startup, if configured.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub bcrypt_cost: u32,
    /// `None` issues tokens without an `exp` claim.
    pub token_ttl: Option<Duration>,
    pub seed_user: Option<SeedUser>,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let server_host = get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let server_port = parse_or("SERVER_PORT", get("SERVER_PORT"), DEFAULT_PORT)?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            get("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;

        let bcrypt_cost = parse_or("BCRYPT_COST", get("BCRYPT_COST"), DEFAULT_BCRYPT_COST)?;
        if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let token_ttl = match get("JWT_EXPIRATION_HOURS") {
            Some(raw) => {
                let hours: i64 = parse("JWT_EXPIRATION_HOURS", raw.clone())?;
                if !(1..=MAX_TOKEN_TTL_HOURS).contains(&hours) {
                    return Err(ConfigError::Invalid {
                        key: "JWT_EXPIRATION_HOURS",
                        value: raw,
                    });
                }
                Some(Duration::hours(hours))
            }
            None => None,
        };

        let seed_user = match (get("SEED_USERNAME"), get("SEED_PASSWORD")) {
            (Some(username), Some(password)) => Some(SeedUser { username, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("SEED_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("SEED_USERNAME")),
        };

        Ok(Self {
            database_url,
            jwt_secret,
            server_host,
            server_port,
            max_connections,
            bcrypt_cost,
            token_ttl,
            seed_user,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

fn parse<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    raw.map_or(Ok(default), |raw| parse(key, raw))
}
