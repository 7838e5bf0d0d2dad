//! Slack crate.
//!
//! Contains functions to communicate with the Slack Web API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod slack;

pub use slack::SlackChatService;
