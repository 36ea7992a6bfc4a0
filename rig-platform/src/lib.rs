//! Platform × operating system abstraction.
//!
//! A platform (e.g. a PC) is bound to one [`OperatingSystem`] at construction
//! and forwards its setup work to it. New platforms and new operating systems
//! can be added independently of each other.

pub mod platforms;
pub mod providers;
pub mod registry;
pub mod traits;

// Re-export commonly used items
pub use platforms::Pc;
pub use providers::{LinuxOs, MacOs, WindowsOs};
pub use registry::OsRegistry;
pub use traits::{ComputerPlatform, OperatingSystem};
