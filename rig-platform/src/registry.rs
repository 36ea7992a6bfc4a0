//! Operating system registry for looking up driver strategies by name.

use crate::providers::{LinuxOs, MacOs, WindowsOs};
use crate::traits::OperatingSystem;
use rig_core::{Result, RigError};

/// Lookup of the shipped [`OperatingSystem`] implementations.
pub struct OsRegistry;

impl OsRegistry {
    /// Get the strategy matching the OS this binary was built for.
    ///
    /// Anything that is neither Windows nor macOS falls back to Linux.
    pub fn current() -> Box<dyn OperatingSystem> {
        #[cfg(target_os = "macos")]
        return Box::new(MacOs);

        #[cfg(windows)]
        return Box::new(WindowsOs);

        #[cfg(not(any(target_os = "macos", windows)))]
        return Box::new(LinuxOs);
    }

    /// Get a strategy by name.
    ///
    /// # Arguments
    /// * `name` - OS name ("linux", "unix", "windows", "win32", "macos", "darwin", "osx")
    ///
    /// # Returns
    /// Some(strategy) if the name is known, None otherwise
    pub fn for_name(name: &str) -> Option<Box<dyn OperatingSystem>> {
        match name.to_lowercase().as_str() {
            "linux" | "unix" => Some(Box::new(LinuxOs)),
            "windows" | "win32" => Some(Box::new(WindowsOs)),
            "macos" | "darwin" | "osx" => Some(Box::new(MacOs)),
            _ => None,
        }
    }

    /// Like `for_name()`, but an unknown name is an error.
    pub fn require(name: &str) -> Result<Box<dyn OperatingSystem>> {
        Self::for_name(name).ok_or_else(|| RigError::UnknownOperatingSystem(name.to_string()))
    }

    pub fn is_supported(name: &str) -> bool {
        Self::for_name(name).is_some()
    }

    /// Canonical names accepted by `for_name()`.
    pub fn supported() -> Vec<&'static str> {
        vec!["linux", "windows", "macos"]
    }
}
