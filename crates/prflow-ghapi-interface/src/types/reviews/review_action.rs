use serde::{Deserialize, Serialize};

/// GitHub Review action.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GhReviewAction {
    /// Dismissed.
    Dismissed,
    /// Edited.
    Edited,
    /// Submitted.
    #[default]
    Submitted,
}
