use prflow_chat_interface::ChatError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum SlackError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid Slack token header value")]
    InvalidTokenError { source: http::header::InvalidHeaderValue },

    #[error("Slack API replied with error: {error}")]
    ApiError { error: String },
}

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        SlackError::HttpError { source: e }
    }
}

impl From<SlackError> for ChatError {
    fn from(e: SlackError) -> Self {
        match e {
            SlackError::ApiError { error } => ChatError::SlackError { error },
            e => ChatError::ImplementationError { source: e.into() },
        }
    }
}
