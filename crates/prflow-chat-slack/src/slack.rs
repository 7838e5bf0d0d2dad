//! Slack adapter

use std::time::Duration;

use async_trait::async_trait;
use http::{header, HeaderMap};
use prflow_chat_interface::{ChatHistoryMessage, ChatMessage, ChatService, Result};
use prflow_config::Config;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::SlackError;

/// Envelope shared by every Slack Web API reply.
#[derive(Deserialize)]
struct SlackResponse<T> {
    ok: bool,
    error: Option<String>,
    #[serde(flatten)]
    body: Option<T>,
}

impl<T> SlackResponse<T> {
    fn into_result(self) -> Result<T, SlackError> {
        match (self.ok, self.body) {
            (true, Some(body)) => Ok(body),
            (_, _) => Err(SlackError::ApiError {
                error: self.error.unwrap_or_else(|| "unknown_error".into()),
            }),
        }
    }
}

/// Slack chat adapter implementation.
#[derive(Clone)]
pub struct SlackChatService {
    config: Config,
}

impl SlackChatService {
    /// Creates new Slack adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, SlackError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", self.config.chat.slack.token))
                .map_err(|e| SlackError::InvalidTokenError { source: e })?,
        );

        Ok(ClientBuilder::new()
            .timeout(Duration::from_millis(self.config.chat.slack.request_timeout))
            .user_agent(format!("prflow/{}", self.config.version))
            .default_headers(headers)
            .build()?)
    }

    fn build_url(&self, method: &str) -> String {
        format!(
            "{}/{}",
            self.config.chat.slack.root_url.trim_end_matches('/'),
            method
        )
    }
}

#[async_trait]
impl ChatService for SlackChatService {
    #[tracing::instrument(skip(self, message), ret)]
    async fn messages_post(
        &self,
        channel: &str,
        thread_ts: Option<String>,
        message: &ChatMessage,
    ) -> Result<String> {
        #[derive(Serialize)]
        struct Request<'a> {
            channel: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            thread_ts: Option<String>,
            unfurl_links: bool,
            #[serde(flatten)]
            message: &'a ChatMessage,
        }

        #[derive(Deserialize)]
        struct Response {
            ts: String,
        }

        let response: SlackResponse<Response> = self
            .get_client()?
            .post(self.build_url("chat.postMessage"))
            .json(&Request {
                channel,
                thread_ts,
                unfurl_links: false,
                message,
            })
            .send()
            .await
            .map_err(SlackError::from)?
            .error_for_status()
            .map_err(SlackError::from)?
            .json()
            .await
            .map_err(SlackError::from)?;

        Ok(response.into_result()?.ts)
    }

    #[tracing::instrument(skip(self))]
    async fn history_list(&self, channel: &str) -> Result<Vec<ChatHistoryMessage>> {
        #[derive(Deserialize)]
        struct Response {
            messages: Vec<ChatHistoryMessage>,
        }

        let limit = self.config.chat.slack.history_limit.to_string();
        let response: SlackResponse<Response> = self
            .get_client()?
            .get(self.build_url("conversations.history"))
            .query(&[("channel", channel), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(SlackError::from)?
            .error_for_status()
            .map_err(SlackError::from)?
            .json()
            .await
            .map_err(SlackError::from)?;

        Ok(response.into_result()?.messages)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Body {
        ts: String,
    }

    #[test]
    fn test_build_url() {
        let mut config = Config::from_env_no_version();
        config.chat.slack.root_url = "https://slack.com/api/".into();
        let service = SlackChatService::new(config);

        assert_eq!(
            service.build_url("chat.postMessage"),
            "https://slack.com/api/chat.postMessage"
        );
    }

    #[test]
    fn test_response_ok() {
        let response: SlackResponse<Body> =
            serde_json::from_str(r#"{"ok": true, "ts": "1700000000.000100"}"#).unwrap();

        assert_eq!(
            response.into_result().unwrap(),
            Body {
                ts: "1700000000.000100".into()
            }
        );
    }

    #[test]
    fn test_response_error() {
        let response: SlackResponse<Body> =
            serde_json::from_str(r#"{"ok": false, "error": "channel_not_found"}"#).unwrap();

        match response.into_result() {
            Err(SlackError::ApiError { error }) => assert_eq!(error, "channel_not_found"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
