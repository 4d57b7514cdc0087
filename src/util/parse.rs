use std::{fmt::Display, str::FromStr};

use crate::error::config::ConfigError;

/// Parses an environment variable value into `T`.
///
/// # Arguments
/// - `name` - Variable name, used in the error
/// - `value` - Raw variable value
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(ConfigError::InvalidEnvVar)` - The value does not parse as `T`
pub fn parse_env_value<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| invalid(name, value, e.to_string()))
}

/// Parses a comma-separated list of Discord guild ids.
///
/// Blank entries are skipped and duplicates are dropped, keeping the first
/// occurrence so configured order is preserved.
///
/// # Returns
/// - `Ok(Vec<u64>)` - At least one non-zero guild id
/// - `Err(ConfigError::InvalidEnvVar)` - An entry is not a valid snowflake, or the
///   list is empty
pub fn parse_guild_ids(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    let mut guild_ids = Vec::new();

    for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let guild_id: u64 = parse_env_value(name, entry)?;
        if guild_id == 0 {
            return Err(invalid(name, value, "guild id must be non-zero".to_string()));
        }
        if !guild_ids.contains(&guild_id) {
            guild_ids.push(guild_id);
        }
    }

    if guild_ids.is_empty() {
        return Err(invalid(name, value, "no guild ids given".to_string()));
    }

    Ok(guild_ids)
}

fn invalid(name: &str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_guild_id_list_in_order() {
        let ids = parse_guild_ids("GUILD_IDS", " 3, 1,,2 ,1").unwrap();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn rejects_non_numeric_guild_id() {
        let result = parse_guild_ids("GUILD_IDS", "123,abc");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { name, .. }) if name == "GUILD_IDS"
        ));
    }

    #[test]
    fn rejects_zero_guild_id() {
        assert!(parse_guild_ids("GUILD_ID", "0").is_err());
    }

    #[test]
    fn rejects_empty_guild_list() {
        assert!(parse_guild_ids("GUILD_IDS", " , ").is_err());
    }

    #[test]
    fn parses_numeric_value() {
        assert_eq!(parse_env_value::<u64>("UPDATE_INTERVAL", " 30 "), Ok(30));
        assert!(parse_env_value::<u64>("UPDATE_INTERVAL", "-1").is_err());
    }
}
