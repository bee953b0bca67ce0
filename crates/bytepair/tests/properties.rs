#![allow(missing_docs)]

use bytepair::{
    Tokenizer,
    encoders::merge_scan,
    training::utility::{PairCounter, TokenSpanBuf},
};
use proptest::prelude::*;

fn trained(
    text: &[u8],
    vocab_size: usize,
) -> Tokenizer<u32> {
    let mut tokenizer = Tokenizer::default();
    tokenizer.train(text, vocab_size, false).unwrap();
    tokenizer
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn round_trip_any_bytes(
        corpus in proptest::collection::vec(any::<u8>(), 0..256),
        text in proptest::collection::vec(any::<u8>(), 0..256),
        vocab_size in 256usize..400,
    ) {
        let tokenizer = trained(&corpus, vocab_size);

        let tokens = tokenizer.encode(&text).unwrap();
        prop_assert_eq!(tokenizer.decode(&tokens).unwrap(), text.clone());

        let tokens = tokenizer.encode(&corpus).unwrap();
        prop_assert_eq!(tokenizer.decode(&tokens).unwrap(), corpus);
    }

    #[test]
    fn round_trip_small_alphabet(
        corpus in "[ab ]{0,120}",
        text in "[abc ]{0,120}",
    ) {
        let tokenizer = trained(corpus.as_bytes(), 300);

        let tokens = tokenizer.encode(&text).unwrap();
        prop_assert_eq!(tokenizer.decode(&tokens).unwrap(), text.as_bytes());
    }

    #[test]
    fn vocab_growth_bound(
        corpus in "[abcd]{0,200}",
        vocab_size in 200usize..320,
    ) {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        let report = tokenizer.train(&corpus, vocab_size, false).unwrap();

        prop_assert_eq!(tokenizer.vocab_size(), 256 + report.merges_done);
        prop_assert!(report.merges_done <= vocab_size.saturating_sub(256));
        prop_assert!(tokenizer.vocab().try_validate().is_ok());
    }

    #[test]
    fn encode_is_idempotent(
        corpus in "[abc]{0,150}",
        text in "[abc]{0,150}",
    ) {
        let tokenizer = trained(corpus.as_bytes(), 320);
        let merges = tokenizer.vocab().merges();

        let tokens = tokenizer.encode(&text).unwrap();

        // A fully merged sequence holds no pair with a rule.
        let span = TokenSpanBuf::from_tokens(&tokens);
        prop_assert!(span.pairs().all(|pair| merges.lookup_rank(&pair).is_none()));

        let mut again = span.clone();
        merge_scan(merges, &mut again);
        prop_assert_eq!(again, span);
    }

    #[test]
    fn encode_matches_rank_order_replay(
        corpus in "[abc ]{0,200}",
        text in "[abcd ]{0,120}",
    ) {
        let tokenizer = trained(corpus.as_bytes(), 340);
        let vocab = tokenizer.vocab();

        let mut replay = TokenSpanBuf::from_bytes(&text, vocab.byte_vocab());
        for rule in vocab.merges().iter() {
            replay.merge_pair(rule.pair, rule.token);
        }

        prop_assert_eq!(tokenizer.encode(&text).unwrap(), replay.into_tokens());
    }

    #[test]
    fn training_is_deterministic(corpus in "[a-e ]{0,200}") {
        let a = trained(corpus.as_bytes(), 330);
        let b = trained(corpus.as_bytes(), 330);

        prop_assert_eq!(a.vocab(), b.vocab());
    }

    #[test]
    fn pair_counts_cover_every_window(tokens in proptest::collection::vec(0u32..6, 0..64)) {
        let counter = PairCounter::from_tokens(&tokens);

        let total: usize = counter.iter().map(|(_, stat)| stat.count).sum();
        prop_assert_eq!(total, tokens.len().saturating_sub(1));

        for (pair, stat) in counter.iter() {
            prop_assert_eq!(
                (tokens[stat.first_seen], tokens[stat.first_seen + 1]),
                pair
            );
        }
    }
}
