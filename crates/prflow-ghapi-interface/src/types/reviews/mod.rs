mod review;
mod review_action;
mod review_event;
mod review_state;

pub use review::GhReview;
pub use review_action::GhReviewAction;
pub use review_event::GhReviewEvent;
pub use review_state::{GhReviewState, GhReviewStateError};
