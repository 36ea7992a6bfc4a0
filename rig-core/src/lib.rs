//! Core types shared by every rig crate.
//!
//! A [`Computer`] is the CPU/GPU/RAM value the rest of the workspace passes
//! around; [`ComputerBuilder`] assembles one part at a time.

pub mod builder;
pub mod computer;
pub mod error;

pub use builder::ComputerBuilder;
pub use computer::Computer;
pub use error::{Result, RigError};
