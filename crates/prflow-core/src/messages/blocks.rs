use serde_json::{json, Value};

pub(crate) fn section(text: &str) -> Value {
    json!({
        "type": "section",
        "text": {
            "type": "mrkdwn",
            "text": text
        }
    })
}

/// Section with a "Review PR" button opening the changed files.
pub(crate) fn section_with_review_button(text: &str, pull_request_url: &str) -> Value {
    json!({
        "type": "section",
        "text": {
            "type": "mrkdwn",
            "text": text
        },
        "accessory": {
            "type": "button",
            "text": {
                "type": "plain_text",
                "text": ":arrow_right: Review PR",
                "emoji": true
            },
            "url": format!("{pull_request_url}/files"),
            "action_id": "button-action"
        }
    })
}

pub(crate) fn divider() -> Value {
    json!({ "type": "divider" })
}

pub(crate) fn context(text: &str) -> Value {
    json!({
        "type": "context",
        "elements": [
            {
                "type": "mrkdwn",
                "text": text
            }
        ]
    })
}
