use std::io::Write;

use crate::{
    LogArgs,
    commands::training::TrainingArgs,
    input_output::{InputArgs, OutputArgs, parse_token_ids},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    training: TrainingArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.training.load_tokenizer()?;

        let text = String::from_utf8(self.input.read_all()?)?;
        let tokens = parse_token_ids(&text)?;
        let bytes = tokenizer.decode(&tokens)?;

        let mut writer = self.output.open_writer()?;
        writer.write_all(&bytes)?;
        writer.flush()?;

        Ok(())
    }
}
