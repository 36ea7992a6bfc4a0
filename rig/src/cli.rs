use clap::Parser;

/// Build a computer, snapshot it, swap it out, restore it and install drivers.
///
/// Takes no arguments: every run performs the same fixed sequence.
#[derive(Debug, Parser)]
#[command(name = "rig", version, about)]
pub struct Args {}
