//! Configuration validation.

use super::error::{ConfigError, ConfigResult};
use super::schema::{BotConfig, LogOutput, LoggingConfig, TesseraConfig};

/// Validates the entire configuration.
pub fn validate_config(config: &TesseraConfig) -> ConfigResult<()> {
    validate_bot_config(&config.bot)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_bot_config(bot: &BotConfig) -> ConfigResult<()> {
    if let Some(token) = &bot.token
        && token.trim().is_empty()
    {
        return Err(ConfigError::validation(
            "bot.token is blank; remove it or set a real token",
        ));
    }

    if bot.prefix.chars().any(char::is_whitespace) {
        return Err(ConfigError::validation(
            "bot.prefix cannot contain whitespace",
        ));
    }

    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> ConfigResult<()> {
    if logging.output == LogOutput::File && logging.file_path.is_none() {
        return Err(ConfigError::validation(
            "logging.file_path is required when logging.output is \"file\"",
        ));
    }

    for target in logging.filters.keys() {
        if target.is_empty() || target.contains(char::is_whitespace) {
            return Err(ConfigError::validation(format!(
                "Invalid logging filter target: {target:?}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TesseraConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_token_rejected() {
        let mut config = TesseraConfig::default();
        config.bot.token = Some("   ".into());
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Validation { .. })
        ));

        config.bot.token = Some("abc".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_prefix_rules() {
        let mut config = TesseraConfig::default();
        config.bot.prefix = String::new();
        assert!(validate_config(&config).is_ok());

        config.bot.prefix = "t. ".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_file_output_needs_path() {
        let mut config = TesseraConfig::default();
        config.logging.output = LogOutput::File;
        assert!(validate_config(&config).is_err());

        config.logging.file_path = Some("tessera.log".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_filter_target_rejected() {
        let mut config = TesseraConfig::default();
        config
            .logging
            .filters
            .insert("tessera runtime".into(), LogLevel::Debug);
        assert!(validate_config(&config).is_err());
    }
}
