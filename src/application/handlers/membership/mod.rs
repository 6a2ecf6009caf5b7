//! Membership handlers.

mod join_club;

pub use join_club::JoinClubHandler;
