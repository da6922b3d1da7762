//! Property tests for chunk balancing over real splits

use cape_splitter_engine::{GroupRef, Splitter, SplitterConfig};
use proptest::prelude::*;

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,7}", 1..10).prop_map(|words| {
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push_str(". ");
        sentence
    })
}

fn batch() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(sentence(), 0..15).prop_map(|s| s.concat()),
        0..8,
    )
}

fn split(texts: Vec<String>, words: usize) -> Splitter {
    let ids: Vec<String> = (0..texts.len()).map(|i| format!("doc-{i}")).collect();
    let config = SplitterConfig::builder()
        .words_per_group(words)
        .max_overlap_before(3)
        .max_overlap_after(3)
        .build()
        .unwrap();
    Splitter::with_config(ids, texts, config).unwrap()
}

proptest! {
    #[test]
    fn chunks_preserve_group_order(texts in batch(), words in 1usize..40, n in 1usize..12) {
        let splitter = split(texts, words);
        let chunks = splitter.get_chunks(n).unwrap();

        let flattened: Vec<GroupRef> = chunks.iter().flatten().cloned().collect();
        let expected: Vec<GroupRef> = splitter.iter_groups().map(GroupRef::from).collect();
        prop_assert_eq!(flattened, expected);
        prop_assert!(chunks.iter().all(|chunk| !chunk.is_empty()));
    }

    #[test]
    fn chunk_words_add_up(texts in batch(), words in 1usize..40, n in 1usize..12) {
        let splitter = split(texts, words);
        let chunks = splitter.get_chunks(n).unwrap();

        let mut total = 0;
        for chunk in &chunks {
            total += splitter.chunk_words(chunk).unwrap();
        }
        prop_assert_eq!(total, splitter.total_number_words());
    }

    #[test]
    fn chunks_respect_the_ideal(texts in batch(), words in 1usize..40, n in 1usize..12) {
        let splitter = split(texts, words);
        let ideal = splitter.total_number_words() / n;
        let chunks = splitter.get_chunks(n).unwrap();

        for (i, chunk) in chunks.iter().enumerate() {
            let chunk_words = splitter.chunk_words(chunk).unwrap();
            if ideal == 0 {
                prop_assert_eq!(chunk.len(), 1);
                continue;
            }
            // Only a chunk made of a single oversized group may exceed the ideal
            prop_assert!(chunk_words <= ideal || chunk.len() == 1);

            // A chunk was closed because the next group did not fit
            if let Some(next) = chunks.get(i + 1) {
                let next_words = splitter.group(&next[0]).unwrap().number_of_words;
                prop_assert!(chunk_words + next_words > ideal);
            }
        }
    }

    #[test]
    fn get_chunks_is_idempotent(texts in batch(), words in 1usize..40, n in 1usize..12) {
        let splitter = split(texts, words);
        prop_assert_eq!(splitter.get_chunks(n).unwrap(), splitter.get_chunks(n).unwrap());
    }
}
