use serde::{Deserialize, Deserializer, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: String,
}

impl From<&str> for GhUser {
    fn from(login: &str) -> Self {
        Self {
            login: login.into(),
        }
    }
}

impl GhUser {
    /// Deserialize a user which GitHub reports as `null` for deleted
    /// accounts, into an empty login.
    pub fn deserialize_nullable<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Self>::deserialize(deserializer)?.unwrap_or_default())
    }
}
