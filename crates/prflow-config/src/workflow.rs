//! Workflow document, as committed in the watched repository.

use std::{collections::HashMap, path::Path};

use serde_json::{Map, Value};
use thiserror::Error;

/// Default location of the workflow document.
pub const DEFAULT_WORKFLOW_CONFIG_PATH: &str = ".github/pull-request-workflow.json";

/// Workflow configuration error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum WorkflowConfigError {
    #[error("Could not read workflow configuration '{}': {}", path, source)]
    IoError {
        path: String,
        source: std::io::Error,
    },

    #[error("Workflow configuration is not valid JSON: {}", source)]
    JsonError { source: serde_json::Error },

    #[error("configuration should be a JSON object")]
    NotAnObject,

    #[error(r#""remindAfter" should be a number"#)]
    RemindAfterNotANumber,

    #[error(r#""remindAfter" should be greater than 0"#)]
    RemindAfterNotPositive,

    #[error(
        r#""githubUserNames" should be defined as ["githubUserName1", "githubUserName2", "githubUserName3"]"#
    )]
    InvalidGithubUserNames,

    #[error(
        r#""githubSlackUserMapper" should be defined as {{"githubUserName1":"slackMemberId1", "githubUserName2":"slackMemberId2", "githubUserName3":"slackMemberId3"}}"#
    )]
    InvalidGithubSlackUserMapper,

    #[error(r#""teamName" should be a string"#)]
    TeamNameNotAString,
}

/// Validated workflow configuration.
///
/// Can only be built through validation, and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowConfig {
    team_name: Option<String>,
    github_user_names: Vec<String>,
    github_slack_user_mapper: HashMap<String, String>,
    remind_after: Option<f64>,
}

impl WorkflowConfig {
    /// Build a configuration from its parts, applying the same validation as the loader.
    pub fn new(
        team_name: Option<String>,
        github_user_names: Vec<String>,
        github_slack_user_mapper: HashMap<String, String>,
        remind_after: Option<f64>,
    ) -> Result<Self, WorkflowConfigError> {
        if let Some(hours) = remind_after {
            if !hours.is_finite() {
                return Err(WorkflowConfigError::RemindAfterNotANumber);
            }
            if hours <= 0.0 {
                return Err(WorkflowConfigError::RemindAfterNotPositive);
            }
        }

        if github_user_names.is_empty() {
            return Err(WorkflowConfigError::InvalidGithubUserNames);
        }

        if github_slack_user_mapper.is_empty() {
            return Err(WorkflowConfigError::InvalidGithubSlackUserMapper);
        }

        Ok(Self {
            team_name,
            github_user_names,
            github_slack_user_mapper,
            remind_after,
        })
    }

    /// Load and validate the document at `path`.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> Result<Self, WorkflowConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WorkflowConfigError::IoError {
                path: path.display().to_string(),
                source: e,
            })?;

        Self::from_json_str(&content)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, WorkflowConfigError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| WorkflowConfigError::JsonError { source: e })?;

        Self::from_value(&value)
    }

    /// Validate an already parsed JSON document.
    pub fn from_value(value: &Value) -> Result<Self, WorkflowConfigError> {
        let object = value.as_object().ok_or(WorkflowConfigError::NotAnObject)?;

        let remind_after = Self::parse_remind_after(object)?;
        let github_user_names = Self::parse_github_user_names(object)?;
        let github_slack_user_mapper = Self::parse_github_slack_user_mapper(object)?;
        let team_name = Self::parse_team_name(object)?;

        Self::new(
            team_name,
            github_user_names,
            github_slack_user_mapper,
            remind_after,
        )
    }

    fn parse_remind_after(object: &Map<String, Value>) -> Result<Option<f64>, WorkflowConfigError> {
        match object.get("remindAfter") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or(WorkflowConfigError::RemindAfterNotANumber),
            Some(_) => Err(WorkflowConfigError::RemindAfterNotANumber),
        }
    }

    fn parse_github_user_names(
        object: &Map<String, Value>,
    ) -> Result<Vec<String>, WorkflowConfigError> {
        let values = object
            .get("githubUserNames")
            .and_then(Value::as_array)
            .ok_or(WorkflowConfigError::InvalidGithubUserNames)?;

        values
            .iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_owned)
                    .ok_or(WorkflowConfigError::InvalidGithubUserNames)
            })
            .collect()
    }

    fn parse_github_slack_user_mapper(
        object: &Map<String, Value>,
    ) -> Result<HashMap<String, String>, WorkflowConfigError> {
        let values = object
            .get("githubSlackUserMapper")
            .and_then(Value::as_object)
            .ok_or(WorkflowConfigError::InvalidGithubSlackUserMapper)?;

        values
            .iter()
            .map(|(k, v)| {
                v.as_str()
                    .map(|v| (k.clone(), v.to_owned()))
                    .ok_or(WorkflowConfigError::InvalidGithubSlackUserMapper)
            })
            .collect()
    }

    fn parse_team_name(object: &Map<String, Value>) -> Result<Option<String>, WorkflowConfigError> {
        match object.get("teamName") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(WorkflowConfigError::TeamNameNotAString),
        }
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team_name.as_deref()
    }

    /// Eligible reviewer pool, in declaration order.
    pub fn github_user_names(&self) -> &[String] {
        &self.github_user_names
    }

    pub fn github_slack_user_mapper(&self) -> &HashMap<String, String> {
        &self.github_slack_user_mapper
    }

    /// Slack member ID for a GitHub login, if mapped.
    pub fn slack_user_id(&self, github_login: &str) -> Option<&str> {
        self.github_slack_user_mapper
            .get(github_login)
            .map(String::as_str)
    }

    /// Inactivity delay (in hours) before reminders are sent.
    ///
    /// `None` disables reminders.
    pub fn remind_after(&self) -> Option<f64> {
        self.remind_after
    }
}
