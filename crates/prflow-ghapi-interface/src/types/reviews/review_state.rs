use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Unknown review state.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown review state: {state}")]
pub struct GhReviewStateError {
    /// Received state.
    pub state: String,
}

/// GitHub Review state.
///
/// The REST API uses `APPROVED`, webhooks use `approved`: both are accepted.
#[derive(Debug, Serialize, PartialEq, Default, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhReviewState {
    /// Approved.
    #[default]
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
}

impl GhReviewState {
    /// Canonical upper case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::ChangesRequested => "CHANGES_REQUESTED",
            Self::Commented => "COMMENTED",
            Self::Dismissed => "DISMISSED",
            Self::Pending => "PENDING",
        }
    }
}

impl Display for GhReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GhReviewState {
    type Err = GhReviewStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_uppercase()[..] {
            "APPROVED" => Ok(Self::Approved),
            "CHANGES_REQUESTED" => Ok(Self::ChangesRequested),
            "COMMENTED" => Ok(Self::Commented),
            "DISMISSED" => Ok(Self::Dismissed),
            "PENDING" => Ok(Self::Pending),
            _ => Err(GhReviewStateError {
                state: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for GhReviewState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
