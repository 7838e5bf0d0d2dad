pub mod comments;
pub mod events;
pub mod pulls;
pub mod reminders;
pub mod reviews;
pub mod threads;
