//! rig-messages
//!
//! Centralized user-facing templates for the rig demo, plus the builder and
//! macro used to fill them in.

pub mod builder;
pub mod macros;
pub mod messages;

pub use builder::MessageBuilder;
pub use messages::{Messages, MESSAGES};
