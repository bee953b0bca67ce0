use crate::commands::{decode::DecodeArgs, demo::DemoArgs, encode::EncodeArgs};

pub mod decode;
pub mod demo;
pub mod encode;
pub mod training;

/// Subcommands for bpair.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train on a short text, then encode and decode it.
    Demo(DemoArgs),

    /// Train on a file, then encode input bytes to token ids.
    Encode(EncodeArgs),

    /// Train on a file, then decode token ids to bytes.
    Decode(DecodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Demo(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}
