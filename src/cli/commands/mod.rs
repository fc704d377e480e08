mod command_result;
pub mod generate;
pub mod helper;
pub mod init;
pub mod stats;

pub use command_result::*;

use anyhow::Result;

use super::args::{Arguments, Command};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate::generate(cmd),
        Some(Command::Stats(cmd)) => stats::stats(cmd),
        Some(Command::Init) => init::init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
