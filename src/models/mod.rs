pub mod admin;
pub mod attendee;
