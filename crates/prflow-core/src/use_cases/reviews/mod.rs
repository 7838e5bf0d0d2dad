pub(crate) mod handle_review_event;
pub(crate) mod request_second_reviewers;
pub(crate) mod resolve_review_summary;
mod review_state_users;

pub use handle_review_event::HandleReviewEventInterface;
pub use request_second_reviewers::{RequestSecondReviewersInterface, AUTO_ASSIGNED_REVIEWERS};
pub use resolve_review_summary::{ResolveReviewSummaryInterface, ReviewSummary};
pub use review_state_users::ReviewStateUsers;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    handle_review_event::MockHandleReviewEventInterface,
    request_second_reviewers::MockRequestSecondReviewersInterface,
    resolve_review_summary::MockResolveReviewSummaryInterface,
};
