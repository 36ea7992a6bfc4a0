// External crates
use clap::Parser;
use tracing::debug;

// Internal imports
use rig_messages::{msg, MESSAGES};

// Local modules
mod cli;
mod demo;

use cli::Args;

fn main() {
    rig_logging::init_subscriber();

    let args = Args::parse();
    debug!(?args, "starting rig demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo::run(&mut out) {
        eprintln!("{}", msg!(MESSAGES.error.generic, error = format!("{:#}", e)));
        std::process::exit(1);
    }
}
