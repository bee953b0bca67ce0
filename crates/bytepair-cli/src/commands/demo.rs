use bytepair::Tokenizer;

use crate::{LogArgs, input_output::format_token_ids};

/// Args for the demo command.
#[derive(clap::Args, Debug)]
pub struct DemoArgs {
    /// Text to train on and round trip.
    #[arg(long, default_value = "hello world the sky is blue")]
    text: String,

    /// Target vocabulary size, including the 256 byte tokens.
    #[arg(long, default_value = "300")]
    vocab_size: usize,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl DemoArgs {
    /// Run the demo command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        println!("Input Text: {}", self.text);

        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        tokenizer.train(&self.text, self.vocab_size, true)?;

        let tokens = tokenizer.encode(&self.text)?;
        println!("Encoded IDs: {}", format_token_ids(&tokens));

        let decoded = tokenizer.decode(&tokens)?;
        println!("Decoded Text: {}", String::from_utf8_lossy(&decoded));

        Ok(())
    }
}
