use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RigError {
    InvalidState(String),
    UnknownPreset(String),
    UnknownOperatingSystem(String),
    Other(#[from] anyhow::Error),
}

impl RigError {
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        RigError::InvalidState(msg.into())
    }
}

impl Display for RigError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RigError::InvalidState(s) => write!(f, "Invalid state: {}", s),
            RigError::UnknownPreset(name) => {
                write!(f, "Unknown preset '{}'", name)
            }
            RigError::UnknownOperatingSystem(name) => {
                write!(f, "Unsupported operating system '{}'", name)
            }
            RigError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, RigError>;
