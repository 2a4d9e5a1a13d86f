//! Property tests for the folding transducer

use medfold_core::*;
use proptest::prelude::*;

fn table_keys() -> Vec<char> {
    table::entries().iter().map(|(k, _)| *k).collect()
}

/// Text mixing table keys, excluded letters and arbitrary characters
fn mixed_text() -> impl Strategy<Value = String> {
    let keys = table_keys();
    let ch = prop_oneof![
        3 => prop::sample::select(keys),
        1 => prop::sample::select(vec!['þ', 'Þ', 'ð', 'ƿ', 'ȝ', '\u{FB03}', '\u{FB04}']),
        2 => any::<char>(),
        2 => prop::char::range('a', 'z'),
    ];
    prop::collection::vec(ch, 0..200).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn folding_twice_equals_folding_once(text in mixed_text()) {
        let mut transducer = FoldingTransducer::new();
        let once = transducer.fold(&text).to_string();
        let twice = transducer.fold(&once).to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_never_exceeds_twice_input(text in mixed_text()) {
        let mut transducer = FoldingTransducer::new();
        let out = transducer.fold(&text);
        prop_assert!(out.chars().count() <= 2 * text.chars().count());
        prop_assert!(out.len() <= 2 * text.len());
    }

    #[test]
    fn plain_text_is_untouched(text in "[a-zA-Z0-9 .,;:!?'-]{0,128}") {
        let mut transducer = FoldingTransducer::new();
        let out = transducer.fold(&text);
        prop_assert_eq!(out.as_ptr(), text.as_ptr());
        prop_assert_eq!(transducer.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn capacity_is_monotonic(texts in prop::collection::vec(mixed_text(), 1..20)) {
        let mut transducer = FoldingTransducer::new();
        let mut last = transducer.capacity();
        let mut longest = 0usize;
        for text in &texts {
            let _ = transducer.fold(text);
            let capacity = transducer.capacity();
            prop_assert!(capacity >= last);
            prop_assert!(capacity.is_power_of_two());
            prop_assert_eq!(capacity % INITIAL_CAPACITY, 0);
            if needs_folding(text) {
                longest = longest.max(text.len());
                prop_assert!(capacity >= 2 * longest);
            }
            last = capacity;
        }
        // Growth happens at most once per doubling
        let doublings = (last / INITIAL_CAPACITY).trailing_zeros() as usize;
        prop_assert!(transducer.grow_count() <= doublings);
    }

    #[test]
    fn matches_one_shot_fold(text in mixed_text()) {
        let mut transducer = FoldingTransducer::new();
        let expected = fold_str(&text).into_owned();
        prop_assert_eq!(transducer.fold(&text), expected.as_str());
    }
}
