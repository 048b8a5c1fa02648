pub mod codes;
pub mod filter;
pub mod queries;
pub mod types;

pub use filter::{AttendeeFilter, AttendeeQuery, FilterValue};
pub use queries::*;
pub use types::{Attendee, AttendeeView};
