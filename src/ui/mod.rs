//! Presentation state that is independent of the session: the mobile menu
//! and transient notices.

pub mod menu;
pub mod notice;
