//! Environment-based application configuration.
//!
//! Read once at startup; nothing is reloaded at runtime. See `.env.example`
//! for every supported variable.

use std::time::Duration;

use crate::{
    error::{config::ConfigError, AppError},
    model::target::GuildTarget,
    util::parse::{parse_env_value, parse_guild_ids},
};

const DEFAULT_TOKEN_ADDRESS: &str = "So11111111111111111111111111111111111111112";
const DEFAULT_CHAIN: &str = "solana";
const DEFAULT_COINGECKO_COIN_ID: &str = "solana";
const DEFAULT_ROLE_NAME: &str = "PriceBotSolColor";
const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 60;
const DEFAULT_PRICE_PRECISION: usize = 6;
const MAX_PRICE_PRECISION: usize = 18;

/// Upstream price API selection and its provider-specific settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderConfig {
    Birdeye {
        api_key: String,
        token_address: String,
        chain: String,
    },
    CoinGecko {
        coin_id: String,
        api_key: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub discord_token: String,

    pub provider: ProviderConfig,

    /// Guilds to reconcile, in order
    pub guild_ids: Vec<u64>,
    /// Name of the role recolored by the 24h change
    pub role_name: String,

    pub update_interval: Duration,
    /// Decimals shown in the price nickname
    pub price_precision: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from a variable lookup function.
    ///
    /// Empty values are treated the same as unset ones.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable has an unusable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let provider = match var("PRICE_PROVIDER")
            .map(|p| p.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("birdeye") => ProviderConfig::Birdeye {
                api_key: required("BIRDEYE_API_KEY")?,
                token_address: var("TOKEN_ADDRESS")
                    .unwrap_or_else(|| DEFAULT_TOKEN_ADDRESS.to_string()),
                chain: var("PRICE_CHAIN").unwrap_or_else(|| DEFAULT_CHAIN.to_string()),
            },
            Some("coingecko") => ProviderConfig::CoinGecko {
                coin_id: var("COINGECKO_COIN_ID")
                    .unwrap_or_else(|| DEFAULT_COINGECKO_COIN_ID.to_string()),
                api_key: var("COINGECKO_API_KEY"),
            },
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "PRICE_PROVIDER".to_string(),
                    value: other.to_string(),
                    reason: "expected 'birdeye' or 'coingecko'".to_string(),
                })
            }
        };

        let guild_ids = match (var("GUILD_IDS"), var("GUILD_ID")) {
            (Some(ids), _) => parse_guild_ids("GUILD_IDS", &ids)?,
            (None, Some(id)) => parse_guild_ids("GUILD_ID", &id)?,
            (None, None) => return Err(ConfigError::MissingEnvVar("GUILD_IDS".to_string())),
        };

        let update_interval_secs = match var("UPDATE_INTERVAL") {
            Some(value) => parse_env_value::<u64>("UPDATE_INTERVAL", &value)?,
            None => DEFAULT_UPDATE_INTERVAL_SECS,
        };
        if update_interval_secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "UPDATE_INTERVAL".to_string(),
                value: "0".to_string(),
                reason: "interval must be at least one second".to_string(),
            });
        }

        let price_precision = match var("PRICE_PRECISION") {
            Some(value) => parse_env_value::<usize>("PRICE_PRECISION", &value)?,
            None => DEFAULT_PRICE_PRECISION,
        };
        if price_precision > MAX_PRICE_PRECISION {
            return Err(ConfigError::InvalidEnvVar {
                name: "PRICE_PRECISION".to_string(),
                value: price_precision.to_string(),
                reason: format!("precision must be at most {MAX_PRICE_PRECISION}"),
            });
        }

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            provider,
            guild_ids,
            role_name: var("ROLE_NAME").unwrap_or_else(|| DEFAULT_ROLE_NAME.to_string()),
            update_interval: Duration::from_secs(update_interval_secs),
            price_precision,
        })
    }

    /// Guild targets in configured order, all sharing the configured role name.
    pub fn targets(&self) -> Vec<GuildTarget> {
        self.guild_ids
            .iter()
            .map(|&guild_id| GuildTarget::new(guild_id, self.role_name.clone()))
            .collect()
    }
}
