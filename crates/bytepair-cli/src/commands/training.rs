use bytepair::{Tokenizer, TokenizerOptions};

/// Training arg group shared by encode and decode.
#[derive(clap::Args, Debug)]
pub struct TrainingArgs {
    /// Training text file.
    #[arg(long)]
    pub train: String,

    /// Target vocabulary size, including the 256 byte tokens.
    #[arg(long, default_value = "300")]
    pub vocab_size: usize,

    /// Reject training or encoding inputs longer than this many bytes.
    #[arg(long, default_value = None)]
    pub max_input_len: Option<usize>,
}

impl TrainingArgs {
    /// Read the training file and train a fresh tokenizer on it.
    pub fn load_tokenizer(&self) -> Result<Tokenizer<u32>, Box<dyn std::error::Error>> {
        let text = std::fs::read(&self.train)?;
        log::info!("Training on {} ({} bytes)", self.train, text.len());

        let mut tokenizer = TokenizerOptions::default()
            .with_max_input_len(self.max_input_len)
            .build();
        let report = tokenizer.train(&text, self.vocab_size, false)?;

        log::info!(
            "Vocabulary Size: {} ({}/{} merges)",
            tokenizer.vocab_size(),
            report.merges_done,
            report.merges_requested
        );

        Ok(tokenizer)
    }
}
