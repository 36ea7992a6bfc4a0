//! Operating system implementations.

mod shared;

pub mod linux;
pub mod macos;
pub mod windows;

pub use linux::LinuxOs;
pub use macos::MacOs;
pub use windows::WindowsOs;
