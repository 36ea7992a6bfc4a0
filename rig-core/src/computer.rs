//! The computer configuration value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A computer described by its three main parts.
///
/// Fields stay `None` until set. Rendering an unset field yields an empty
/// string, so `Computer::default()` renders as `CPU: , GPU: , RAM: `.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) gpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) ram: Option<String>,
}

impl Computer {
    pub fn cpu(&self) -> Option<&str> {
        self.cpu.as_deref()
    }

    pub fn gpu(&self) -> Option<&str> {
        self.gpu.as_deref()
    }

    pub fn ram(&self) -> Option<&str> {
        self.ram.as_deref()
    }

    /// True once every part has been set.
    pub fn is_complete(&self) -> bool {
        self.cpu.is_some() && self.gpu.is_some() && self.ram.is_some()
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {}, GPU: {}, RAM: {}",
            self.cpu().unwrap_or_default(),
            self.gpu().unwrap_or_default(),
            self.ram().unwrap_or_default()
        )
    }
}
