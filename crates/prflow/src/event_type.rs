//! Event types.

use prflow_core::use_cases::events::WorkflowEvent;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventTypeError {
    /// Unsupported event.
    #[error("Unsupported event: {}", event)]
    UnsupportedEvent { event: String },
    /// Event without payload.
    #[error("Event '{}' has no payload to parse", event_type)]
    NoPayload { event_type: EventType },
    /// Malformed payload.
    #[error("Could not parse '{}' event payload,\n  caused by: {}", event_type, source)]
    EventParseError {
        event_type: EventType,
        source: serde_json::Error,
    },
}

/// Event type, as given by `GITHUB_EVENT_NAME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Issue comment event.
    IssueComment,
    /// Pull request event.
    PullRequest,
    /// Pull request review event.
    PullRequestReview,
    /// Scheduled run.
    Schedule,
}

impl EventType {
    /// Convert event type to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for EventType {
    type Error = EventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "issue_comment" => Ok(Self::IssueComment),
            "pull_request" => Ok(Self::PullRequest),
            "pull_request_review" => Ok(Self::PullRequestReview),
            "schedule" => Ok(Self::Schedule),
            name => Err(EventTypeError::UnsupportedEvent {
                event: name.to_owned(),
            }),
        }
    }
}

impl From<EventType> for &'static str {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::IssueComment => "issue_comment",
            EventType::PullRequest => "pull_request",
            EventType::PullRequestReview => "pull_request_review",
            EventType::Schedule => "schedule",
        }
    }
}

fn parse_event_type<'de, T: Deserialize<'de>>(
    event_type: EventType,
    body: &'de str,
) -> Result<T, EventTypeError> {
    serde_json::from_str(body).map_err(|e| EventTypeError::EventParseError {
        event_type,
        source: e,
    })
}

/// Parse a webhook payload into a workflow event.
pub(crate) fn parse_event_payload(
    event_type: EventType,
    body: &str,
) -> Result<WorkflowEvent, EventTypeError> {
    match event_type {
        EventType::IssueComment => {
            parse_event_type(event_type, body).map(WorkflowEvent::IssueComment)
        }
        EventType::PullRequest => {
            parse_event_type(event_type, body).map(WorkflowEvent::PullRequest)
        }
        EventType::PullRequestReview => {
            parse_event_type(event_type, body).map(WorkflowEvent::PullRequestReview)
        }
        EventType::Schedule => Err(EventTypeError::NoPayload { event_type }),
    }
}
