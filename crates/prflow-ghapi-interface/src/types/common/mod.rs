mod label;
mod repository;
mod user;

pub use label::GhLabel;
pub use repository::GhRepository;
pub use user::GhUser;
