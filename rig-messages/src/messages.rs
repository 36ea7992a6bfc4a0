//! Central registry for all user-facing message templates.
//!
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted by the `MessageBuilder`.

pub struct DemoMessages {
    pub initial_pc: &'static str,
    pub modified_pc: &'static str,
    pub restored_pc: &'static str,
}

pub struct PlatformMessages {
    pub install_drivers: &'static str,
}

pub struct ErrorMessages {
    pub generic: &'static str,
    pub save_without_computer: &'static str,
}

pub struct Messages {
    pub demo: DemoMessages,
    pub platform: PlatformMessages,
    pub error: ErrorMessages,
}

pub const MESSAGES: Messages = Messages {
    demo: DemoMessages {
        initial_pc: "Initial PC: {computer}",
        modified_pc: "Modified PC: {computer}",
        restored_pc: "Restored PC: {computer}",
    },
    platform: PlatformMessages {
        install_drivers: "Installing {os} drivers for: {computer}",
    },
    error: ErrorMessages {
        generic: "❌ Error: {error}",
        save_without_computer: "no current configuration to save",
    },
};
