use std::io::Write;

use crate::{
    LogArgs,
    commands::training::TrainingArgs,
    input_output::{InputArgs, OutputArgs, format_token_ids},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    training: TrainingArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.training.load_tokenizer()?;

        let text = self.input.read_all()?;
        let tokens = tokenizer.encode(&text)?;
        log::info!("Encoded {} bytes into {} tokens", text.len(), tokens.len());

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{}", format_token_ids(&tokens))?;
        writer.flush()?;

        Ok(())
    }
}
