//! Shared models.

#![warn(clippy::all)]

mod pull_request_handle;
mod repository_path;
mod thread_marker;

pub use pull_request_handle::{PullRequestHandle, PullRequestHandleError};
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use thread_marker::ThreadMarker;
