use std::collections::HashMap;

use prflow_ghapi_interface::{review::GhReviewApi, types::GhReviewState};

/// Reviewers of a pull request, partitioned by their current review state.
///
/// A reviewer's state is their latest verdict (approval or change request).
/// Reviewers who only ever commented land in `commented`, except for the
/// pull request author. Each list keeps the order in which a login was first
/// classified while walking the reviews oldest first.
///
/// Dismissed and pending reviews carry no verdict and are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewStateUsers {
    pub approved: Vec<String>,
    pub changes_requested: Vec<String>,
    pub commented: Vec<String>,
}

impl ReviewStateUsers {
    /// Classify reviews, ordered oldest first.
    ///
    /// Reviews from deleted accounts have no user and are skipped.
    pub fn from_reviews(reviews: &[GhReviewApi], author: &str) -> Self {
        let events: Vec<(&str, GhReviewState)> = reviews
            .iter()
            .filter(|r| {
                matches!(
                    r.state,
                    GhReviewState::Approved
                        | GhReviewState::ChangesRequested
                        | GhReviewState::Commented
                )
            })
            .filter_map(|r| r.user.as_ref().map(|u| (u.login.as_str(), r.state)))
            .collect();

        Self::from_events(&events, author)
    }

    /// Classify `(login, state)` pairs, ordered oldest first.
    pub fn from_events(events: &[(&str, GhReviewState)], author: &str) -> Self {
        let mut only_commented: HashMap<&str, bool> = HashMap::new();
        let mut latest_verdict: HashMap<&str, GhReviewState> = HashMap::new();

        for &(user, state) in events {
            let entry = only_commented.entry(user).or_insert(true);
            if state != GhReviewState::Commented {
                *entry = false;
                latest_verdict.insert(user, state);
            }
        }

        let mut output = Self::default();
        for &(user, _) in events {
            if only_commented.get(user).copied().unwrap_or(false) && user != author {
                push_unique(&mut output.commented, user);
            }

            match latest_verdict.get(user) {
                Some(GhReviewState::Approved) => push_unique(&mut output.approved, user),
                Some(GhReviewState::ChangesRequested) => {
                    push_unique(&mut output.changes_requested, user)
                }
                _ => (),
            }
        }

        output
    }

    /// Logins which already gave a verdict.
    pub fn with_verdict(&self) -> impl Iterator<Item = &String> {
        self.approved.iter().chain(self.changes_requested.iter())
    }
}

fn push_unique(users: &mut Vec<String>, user: &str) {
    if !users.iter().any(|u| u == user) {
        users.push(user.to_string());
    }
}
