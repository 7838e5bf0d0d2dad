use serde::Deserialize;
use time::OffsetDateTime;

use crate::types::{GhReviewState, GhUser};

/// Review (API version)
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GhReviewApi {
    /// User, missing for deleted accounts.
    #[serde(default)]
    pub user: Option<GhUser>,
    /// Submitted at (missing on pending reviews).
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    /// State.
    pub state: GhReviewState,
}
