//! Config module.

mod workflow;

use std::env;

pub use workflow::{WorkflowConfig, WorkflowConfigError, DEFAULT_WORKFLOW_CONFIG_PATH};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API request timeout (in milliseconds).
    pub request_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Slack options.
    pub slack: ChatSlackConfig,
}

#[derive(Debug, Clone)]
pub struct ChatSlackConfig {
    /// Slack API root URL.
    pub root_url: String,
    /// Slack bot token.
    pub token: String,
    /// Target channel ID.
    pub channel_id: String,
    /// Slack API request timeout (in milliseconds).
    pub request_timeout: u64,
    /// Max messages scanned when looking for a pull request thread.
    pub history_limit: u32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Chat options.
    pub chat: ChatConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Workflow document path.
    pub workflow_config_path: String,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("PRFLOW_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    request_timeout: env_to_u64("PRFLOW_API_GITHUB_REQUEST_TIMEOUT", 30000),
                    root_url: env_to_str("PRFLOW_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str(
                        "PRFLOW_API_GITHUB_TOKEN",
                        &env_to_str("GITHUB_TOKEN", ""),
                    ),
                },
            },
            chat: ChatConfig {
                slack: ChatSlackConfig {
                    root_url: env_to_str("PRFLOW_CHAT_SLACK_ROOT_URL", "https://slack.com/api"),
                    token: env_to_str("PRFLOW_CHAT_SLACK_TOKEN", ""),
                    channel_id: env_to_str("PRFLOW_CHAT_SLACK_CHANNEL_ID", ""),
                    request_timeout: env_to_u64("PRFLOW_CHAT_SLACK_REQUEST_TIMEOUT", 30000),
                    history_limit: env_to_u32("PRFLOW_CHAT_SLACK_HISTORY_LIMIT", 200),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("PRFLOW_LOGGING_USE_BUNYAN", false),
            },
            workflow_config_path: env_to_str(
                "PRFLOW_WORKFLOW_CONFIG_PATH",
                DEFAULT_WORKFLOW_CONFIG_PATH,
            ),
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
