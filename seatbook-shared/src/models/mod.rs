pub mod events;
pub mod submission;
