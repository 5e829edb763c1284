//! Behavioural properties of the encoding transforms.

use proptest::prelude::*;

use tokalign::{Encoding, Offsets, PaddingDirection, TokalignError, Token};

// ============================================================================
// Helpers
// ============================================================================

/// Contiguous spans of the given widths; `new_word` starts a new word group.
fn build(parts: &[(usize, bool)], type_id: u32) -> Encoding {
    let mut pos = 0;
    let mut word = 0;
    let tokens = parts
        .iter()
        .enumerate()
        .map(|(i, &(width, new_word))| {
            if i > 0 && new_word {
                word += 1;
            }
            let token = Token::new(i as u32, format!("t{i}"), (pos, pos + width)).word(word);
            pos += width;
            token
        })
        .collect();
    Encoding::from_tokens(tokens, type_id)
}

fn ids(len: u32) -> Encoding {
    let tokens = (0..len)
        .map(|i| Token::new(i, i.to_string(), (i as usize, i as usize + 1)).word(i))
        .collect();
    Encoding::from_tokens(tokens, 0)
}

fn assert_parallel(encoding: &Encoding) {
    let len = encoding.len();
    assert_eq!(encoding.type_ids().len(), len);
    assert_eq!(encoding.tokens().len(), len);
    assert_eq!(encoding.offsets().len(), len);
    assert_eq!(encoding.special_tokens_mask().len(), len);
    assert_eq!(encoding.attention_mask().len(), len);
    assert_eq!(encoding.words().len(), len);
    encoding.overflowing().iter().for_each(assert_parallel);
}

fn arb_parts(max_len: usize) -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((1usize..4, any::<bool>()), 0..max_len)
}

/// `(max_len, stride)` with `stride < max_len`.
fn arb_window() -> impl Strategy<Value = (usize, usize)> {
    (1usize..8).prop_flat_map(|max_len| (Just(max_len), 0..max_len))
}

// ============================================================================
// Truncation
// ============================================================================

#[test]
fn truncate_ten_tokens_into_stride_two_windows() {
    let mut encoding = ids(10);
    encoding.truncate(4, 2).unwrap();

    assert_eq!(encoding.ids(), &[0, 1, 2, 3]);
    let windows: Vec<Vec<u32>> = encoding
        .overflowing()
        .iter()
        .map(|o| o.ids().to_vec())
        .collect();
    assert_eq!(
        windows,
        vec![vec![2, 3, 4, 5], vec![4, 5, 6, 7], vec![6, 7, 8, 9]]
    );
}

#[test]
fn truncate_exact_multiple_has_no_trailing_window() {
    // 6 overflow tokens, part size 3
    let mut encoding = ids(9);
    encoding.truncate(3, 0).unwrap();
    assert_eq!(encoding.overflowing().len(), 2);
    assert_eq!(encoding.overflowing()[1].ids(), &[6, 7, 8]);
}

#[test]
fn truncate_replaces_existing_windows() {
    let mut encoding = ids(10);
    encoding.truncate(8, 0).unwrap();
    encoding.truncate(6, 0).unwrap();
    assert_eq!(encoding.overflowing().len(), 1);
    assert_eq!(encoding.overflowing()[0].ids(), &[6, 7]);
}

#[test]
fn truncate_rejects_bad_arguments_on_any_encoding() {
    for len in 1..5 {
        let mut encoding = ids(len);
        assert!(matches!(
            encoding.truncate(0, 0),
            Err(TokalignError::InvalidArgument(_))
        ));
        assert!(matches!(
            encoding.truncate(2, 2),
            Err(TokalignError::InvalidArgument(_))
        ));
        assert!(matches!(
            encoding.truncate(2, 5),
            Err(TokalignError::InvalidArgument(_))
        ));
        assert_eq!(encoding, ids(len));
    }
}

#[test]
fn windows_do_not_share_storage_with_primary() {
    let mut encoding = ids(6);
    encoding.truncate(4, 2).unwrap();
    let mut windows = encoding.take_overflowing();

    windows[0].pad(8, 99, 0, "[PAD]", PaddingDirection::Left);
    assert_eq!(encoding.ids(), &[0, 1, 2, 3]);
    assert_eq!(windows[0].ids(), &[99, 99, 99, 99, 2, 3, 4, 5]);
}

proptest! {
    #[test]
    fn truncate_tiles_overflow_with_stride_overlap(
        parts in arb_parts(30),
        (max_len, stride) in arb_window()
    ) {
        let original = build(&parts, 0);
        let mut encoding = original.clone();
        encoding.truncate(max_len, stride).unwrap();
        assert_parallel(&encoding);

        if original.len() <= max_len {
            prop_assert_eq!(&encoding, &original);
            return Ok(());
        }

        prop_assert_eq!(encoding.ids(), &original.ids()[..max_len]);

        let mut previous = encoding.ids().to_vec();
        let mut fresh = Vec::new();
        for window in encoding.overflowing() {
            prop_assert!(window.len() <= max_len);
            prop_assert!(window.len() > stride);
            prop_assert_eq!(&window.ids()[..stride], &previous[previous.len() - stride..]);
            fresh.extend_from_slice(&window.ids()[stride..]);
            previous = window.ids().to_vec();
        }
        prop_assert_eq!(&fresh[..], &original.ids()[max_len..]);
    }
}

// ============================================================================
// Merge
// ============================================================================

#[test]
fn merge_overflow_is_empty_without_windows() {
    let mut encoding = ids(3);
    encoding.merge_with(ids(2));
    assert!(encoding.overflowing().is_empty());
}

proptest! {
    #[test]
    fn merge_rebases_offsets_and_crosses_windows(
        first in arb_parts(12),
        second in arb_parts(12),
        (first_max, first_stride) in arb_window(),
        (second_max, second_stride) in arb_window()
    ) {
        let mut current = build(&first, 0);
        current.truncate(first_max, first_stride).unwrap();
        let mut other = build(&second, 1);
        other.truncate(second_max, second_stride).unwrap();

        let base = current.offsets().iter().map(|o| o.end).max().unwrap_or(0);
        let (a, b) = (current.overflowing().len(), other.overflowing().len());
        let own_len = current.len();

        let mut merged = current.clone();
        merged.merge_with(other.clone());
        assert_parallel(&merged);

        prop_assert_eq!(merged.len(), own_len + other.len());
        prop_assert_eq!(merged.overflowing().len(), a * b + a + b);
        for (rebased, original) in merged.offsets()[own_len..].iter().zip(other.offsets()) {
            prop_assert_eq!(*rebased, original.shifted(base));
        }
        prop_assert!(merged.type_ids()[own_len..].iter().all(|&t| t == 1));
    }
}

// ============================================================================
// Padding
// ============================================================================

proptest! {
    #[test]
    fn pad_is_idempotent(
        parts in arb_parts(20),
        (max_len, stride) in arb_window(),
        target in 0usize..25,
        left in any::<bool>()
    ) {
        let direction = if left { PaddingDirection::Left } else { PaddingDirection::Right };
        let mut encoding = build(&parts, 0);
        encoding.truncate(max_len, stride).unwrap();

        let mut once = encoding.clone();
        once.pad(target, 0, 0, "[PAD]", direction);
        let mut twice = once.clone();
        twice.pad(target, 0, 0, "[PAD]", direction);

        assert_parallel(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.len(), encoding.len().max(target));
        for window in once.overflowing() {
            prop_assert!(window.len() >= target);
        }
    }

    #[test]
    fn pad_below_length_is_noop(parts in arb_parts(20), shortfall in 0usize..5) {
        let encoding = build(&parts, 0);
        let mut padded = encoding.clone();
        padded.pad(encoding.len().saturating_sub(shortfall), 7, 7, "[PAD]", PaddingDirection::Left);
        prop_assert_eq!(padded, encoding);
    }
}

// ============================================================================
// Positional lookups
// ============================================================================

proptest! {
    #[test]
    fn word_span_covers_each_of_its_tokens(parts in arb_parts(20)) {
        let encoding = build(&parts, 0);
        for token in 0..encoding.len() {
            let word = encoding.token_to_word(token).unwrap();
            let word_span = encoding.word_to_chars(word).unwrap();
            let token_span = encoding.token_to_chars(token).unwrap();
            prop_assert!(word_span.start <= token_span.start);
            prop_assert!(token_span.end <= word_span.end);

            let (start, end) = encoding.word_to_tokens(word).unwrap();
            prop_assert!(start <= token && token < end);
        }
    }

    #[test]
    fn contiguous_positions_resolve_to_one_token(parts in arb_parts(20)) {
        let encoding = build(&parts, 0);
        let total = encoding.offsets().last().map_or(0, |o| o.end);
        for pos in 0..total {
            let token = encoding.char_to_token(pos).unwrap();
            let owners = encoding.offsets().iter().filter(|o| o.contains(pos)).count();
            prop_assert_eq!(owners, 1);
            prop_assert!(encoding.offsets()[token].contains(pos));
            prop_assert_eq!(encoding.char_to_word(pos), encoding.token_to_word(token));
        }
        prop_assert_eq!(encoding.char_to_token(total), None);
    }
}

#[test]
fn lookups_after_pair_merge_use_rebased_positions() {
    let mut encoding = build(&[(2, true), (3, false)], 0);
    encoding.merge_with(build(&[(4, true)], 1));

    // second sequence starts at 5 and its word becomes 1
    assert_eq!(encoding.word_to_chars(1), Some(Offsets::new(5, 9)));
    assert_eq!(encoding.char_to_token(6), Some(2));
    assert_eq!(encoding.char_to_word(6), Some(1));
    assert_eq!(encoding.word_to_tokens(0), Some((0, 2)));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn encoding_json_roundtrip_keeps_windows() {
    let mut encoding = ids(6);
    encoding.truncate(4, 1).unwrap();
    encoding.pad(4, 0, 0, "[PAD]", PaddingDirection::Right);

    let json = serde_json::to_string(&encoding).unwrap();
    let parsed: Encoding = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, encoding);
}

#[test]
fn untracked_words_serialize_as_null() {
    let mut encoding = ids(1);
    encoding.pad(2, 0, 0, "[PAD]", PaddingDirection::Right);
    let value = serde_json::to_value(&encoding).unwrap();
    assert_eq!(value["words"], serde_json::json!([0, null]));
    assert!(value.get("overflowing").is_none());
}

#[test]
fn ragged_json_is_rejected() {
    let json = r#"{
        "ids": [1, 2, 3, 4, 5],
        "type_ids": [0],
        "tokens": ["a"],
        "offsets": [{"start": 0, "end": 1}],
        "special_tokens_mask": [0],
        "attention_mask": [1],
        "words": [0]
    }"#;
    let err = serde_json::from_str::<Encoding>(json).unwrap_err();
    assert!(err.to_string().contains("differ in length"));
}

#[test]
fn ragged_nested_window_is_rejected() {
    let mut encoding = ids(6);
    encoding.truncate(4, 1).unwrap();
    let mut value = serde_json::to_value(&encoding).unwrap();
    value["overflowing"][0]["tokens"] = serde_json::json!([]);

    assert!(serde_json::from_value::<Encoding>(value.clone()).is_err());

    // the same window shape is accepted once it is consistent again
    value["overflowing"][0]["tokens"] = serde_json::json!(["3", "4", "5"]);
    let parsed: Encoding = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, encoding);
}

#[test]
fn truncating_deserialized_encoding_keeps_arrays_parallel() {
    let json = serde_json::to_string(&ids(7)).unwrap();
    let mut parsed: Encoding = serde_json::from_str(&json).unwrap();
    parsed.truncate(3, 1).unwrap();
    assert_parallel(&parsed);
    assert_eq!(parsed.overflowing().len(), 2);
}
