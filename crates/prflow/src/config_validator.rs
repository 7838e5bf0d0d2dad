//! Validation utilities.

use prflow_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        error.push_str(&format!("  - Missing env. var.: {}", name));
    }

    let mut error = String::new();

    // GitHub token, either explicit or from the Actions runner
    if config.api.github.token.is_empty() {
        _missing(&mut error, "PRFLOW_API_GITHUB_TOKEN");
    }

    // Slack
    if config.chat.slack.token.is_empty() {
        _missing(&mut error, "PRFLOW_CHAT_SLACK_TOKEN");
    }
    if config.chat.slack.channel_id.is_empty() {
        _missing(&mut error, "PRFLOW_CHAT_SLACK_CHANNEL_ID");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
