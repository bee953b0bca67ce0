//! # Vocab Trainer

use crate::{
    encoders::merge_scan,
    errors::{BPResult, BytePairError},
    training::utility::{PairCounter, TokenSpanBuf},
    types::TokenType,
    vocab::{
        PairMergeVocab,
        utility::validators::{merges_to_target, try_vocab_size},
    },
};

/// Options for [`BinaryPairVocabTrainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryPairVocabTrainerOptions {
    /// The target vocab size, including the 256 byte tokens.
    pub vocab_size: usize,

    /// Log one ``Merge i/total: (a, b) -> t`` line per merge at `info`.
    pub verbose: bool,

    /// Optional limit on the training text length, in bytes.
    pub max_input_len: Option<usize>,
}

impl BinaryPairVocabTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    ///
    /// ## Returns
    /// A new `BinaryPairVocabTrainerOptions` instance.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            verbose: false,
            max_input_len: None,
        }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size; sizes <= 256 train no merges.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets per-merge progress logging.
    pub fn with_verbose(
        self,
        verbose: bool,
    ) -> Self {
        Self { verbose, ..self }
    }

    /// Sets the training text length limit.
    pub fn with_max_input_len(
        self,
        max_input_len: Option<usize>,
    ) -> Self {
        Self {
            max_input_len,
            ..self
        }
    }

    /// Initializes a [`BinaryPairVocabTrainer`] from these options.
    pub fn init(self) -> BinaryPairVocabTrainer {
        BinaryPairVocabTrainer::new(self)
    }
}

/// Summary of a training run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrainReport {
    /// Merges needed to reach the target vocab size.
    pub merges_requested: usize,

    /// Merges learned.
    pub merges_done: usize,

    /// True if training ran out of repeated pairs before the target.
    pub stopped_early: bool,
}

/// Trainer for learning binary pair encodings.
#[derive(Debug, Clone)]
pub struct BinaryPairVocabTrainer {
    /// Trainer options.
    pub options: BinaryPairVocabTrainerOptions,
}

impl BinaryPairVocabTrainer {
    /// Initializes a [`BinaryPairVocabTrainer`].
    pub fn new(options: BinaryPairVocabTrainerOptions) -> Self {
        Self { options }
    }

    /// Learns merges from `text`, appending them to `vocab`.
    ///
    /// A fresh vocab learns merge `i` as token ``256 + i``. A vocab which
    /// already holds merges first re-encodes `text` with them, and then
    /// continues from its next token; `vocab_size` is always the total size.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary to extend.
    /// * `text` - the raw training bytes.
    ///
    /// ## Returns
    /// A [`TrainReport`]; or an error, raised before `vocab` is modified,
    /// if the text exceeds the configured limit or the vocab size does not
    /// fit the token type.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab, text)))]
    pub fn train<T: TokenType>(
        &self,
        vocab: &mut PairMergeVocab<T>,
        text: &[u8],
    ) -> BPResult<TrainReport> {
        if let Some(limit) = self.options.max_input_len
            && text.len() > limit
        {
            return Err(BytePairError::InputTooLarge {
                size: text.len(),
                limit,
            });
        }
        let vocab_size = try_vocab_size::<T>(self.options.vocab_size)?;

        let num_merges = merges_to_target(vocab.len(), vocab_size);
        let mut report = TrainReport {
            merges_requested: num_merges,
            ..Default::default()
        };
        if num_merges == 0 {
            log::debug!(
                "Vocab size {} already reached ({} tokens); nothing to train",
                vocab_size,
                vocab.len()
            );
            return Ok(report);
        }

        log::info!(
            "Starting BPE training: {} merges to compute over {} bytes",
            num_merges,
            text.len()
        );

        let mut span = TokenSpanBuf::from_bytes(text, vocab.byte_vocab());
        merge_scan(vocab.merges(), &mut span);

        let mut counter = PairCounter::default();
        while report.merges_done < num_merges {
            counter.count(span.tokens());

            let best = counter.most_frequent().filter(|(_, stat)| stat.count > 1);
            let Some((pair, stat)) = best else {
                // Every remaining pair is unique.
                report.stopped_early = true;
                break;
            };

            let rule = vocab.push_merge(pair)?;
            span.merge_pair(pair, rule.token);
            report.merges_done += 1;

            if self.options.verbose {
                log::info!(
                    "Merge {}/{}: ({}, {}) -> {}",
                    report.merges_done,
                    num_merges,
                    pair.0,
                    pair.1,
                    rule.token
                );
            } else {
                log::debug!(
                    "Merge {}/{}: ({}, {}) -> {} (frequency: {})",
                    report.merges_done,
                    num_merges,
                    pair.0,
                    pair.1,
                    rule.token,
                    stat.count
                );
            }
        }

        vocab.shrink_to_fit();

        log::info!(
            "Finished training: {} merges completed{}",
            report.merges_done,
            if report.stopped_early {
                " (no repeated pairs remain)"
            } else {
                ""
            }
        );
        Ok(report)
    }
}
