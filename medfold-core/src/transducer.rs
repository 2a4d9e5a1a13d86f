//! Token transducer with a reusable output buffer
//!
//! The transducer rewrites token text through the folding table. Text
//! without any character in the table's range is handed back untouched, so
//! the common case of a plain word costs one scan and no allocation.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::table::{fold_char, is_interesting};

/// Initial size of the output buffer in bytes
pub const INITIAL_CAPACITY: usize = 256;

/// Check whether any character of `text` may need folding
#[inline]
pub fn needs_folding(text: &str) -> bool {
    text.chars().any(is_interesting)
}

/// Fold a string without keeping a transducer around
///
/// Borrows the input when nothing needs folding.
pub fn fold_str(text: &str) -> Cow<'_, str> {
    if !needs_folding(text) {
        return Cow::Borrowed(text);
    }
    let mut output = String::with_capacity(text.len());
    fold_into(text, &mut output);
    Cow::Owned(output)
}

/// Append the folded form of `input` to `output`
fn fold_into(input: &str, output: &mut String) {
    for ch in input.chars() {
        if !is_interesting(ch) {
            output.push(ch);
            continue;
        }
        match fold_char(ch) {
            Some(folded) => output.extend(folded.as_slice()),
            None => output.push(ch),
        }
    }
}

/// Smallest power-of-two multiple of `size` that holds `needed` bytes
fn grown_capacity(mut size: usize, needed: usize) -> usize {
    while size < needed {
        size *= 2;
    }
    size
}

/// Folds token text into a buffer that is reused across calls
///
/// The buffer capacity is always `INITIAL_CAPACITY * 2^k`, large enough for
/// twice the longest token folded so far, and never shrinks. One transducer
/// serves one token stream; concurrent streams each need their own.
#[derive(Debug)]
pub struct FoldingTransducer {
    output: String,
    capacity: usize,
    grow_count: usize,
}

// `String::clone` only allocates the current length, so the copy reserves
// the full logical capacity itself.
impl Clone for FoldingTransducer {
    fn clone(&self) -> Self {
        let mut output = String::with_capacity(self.capacity);
        output.push_str(&self.output);
        Self {
            output,
            capacity: self.capacity,
            grow_count: self.grow_count,
        }
    }
}

impl Default for FoldingTransducer {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldingTransducer {
    /// Create a transducer with the initial buffer size
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create a transducer whose buffer holds at least `min_capacity` bytes
    pub fn with_capacity(min_capacity: usize) -> Self {
        let capacity = grown_capacity(INITIAL_CAPACITY, min_capacity);
        Self {
            output: String::with_capacity(capacity),
            capacity,
            grow_count: 0,
        }
    }

    /// Current buffer capacity in bytes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of times the buffer has been grown
    pub fn grow_count(&self) -> usize {
        self.grow_count
    }

    /// Fold `text`, returning either `text` itself or the rewritten buffer
    ///
    /// The returned slice borrows the transducer, so it cannot outlive the
    /// next call.
    pub fn fold<'a>(&'a mut self, text: &'a str) -> &'a str {
        if !needs_folding(text) {
            return text;
        }
        self.rewrite(text);
        &self.output
    }

    /// Rewrite a token's text in place
    ///
    /// Returns `true` when the text was rewritten. The token keeps its own
    /// allocation; only its contents change.
    pub fn fold_token(&mut self, text: &mut String) -> bool {
        if !needs_folding(text) {
            return false;
        }
        self.rewrite(text);
        text.clear();
        text.push_str(&self.output);
        true
    }

    fn rewrite(&mut self, input: &str) {
        // Worst case: every character expands to two
        let max_size_needed = 2 * input.len();
        self.output.clear();
        self.ensure_capacity(max_size_needed);

        // Always restart from the first character
        fold_into(input, &mut self.output);
        debug_assert!(self.output.len() <= max_size_needed);
    }

    fn ensure_capacity(&mut self, needed: usize) {
        if self.capacity >= needed {
            return;
        }
        let size = grown_capacity(self.capacity, needed);
        self.output.reserve(size);
        self.capacity = size;
        self.grow_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn fold(text: &str) -> String {
        FoldingTransducer::new().fold(text).to_string()
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(fold("café"), "cafe");
        assert_eq!(fold("ﬁre"), "fire");
        assert_eq!(fold("Æon"), "Aeon");
        assert_eq!(fold("naïve"), "naive");
        assert_eq!(fold("þing"), "þing");
        assert_eq!(fold("Müller—Schmidt"), "Muller-Schmidt");
    }

    #[test]
    fn test_plain_text_is_returned_as_is() {
        let mut transducer = FoldingTransducer::new();
        let text = "plain ascii words";
        let out = transducer.fold(text);
        assert_eq!(out.as_ptr(), text.as_ptr());
        assert_eq!(transducer.capacity(), INITIAL_CAPACITY);
        assert_eq!(transducer.grow_count(), 0);
    }

    #[test]
    fn test_rescans_from_first_character() {
        // Characters before the first foldable one must survive
        assert_eq!(fold("abcÉdef"), "abcEdef");
        assert_eq!(fold("ﬃ-ﬁ"), "ﬃ-fi");
    }

    #[test]
    fn test_combining_marks_are_removed() {
        assert_eq!(fold("e\u{0301}te\u{0301}"), "ete");
        assert_eq!(fold("\u{0301}"), "");
    }

    #[test]
    fn test_empty_input() {
        let mut transducer = FoldingTransducer::new();
        assert_eq!(transducer.fold(""), "");
        assert_eq!(transducer.grow_count(), 0);
    }

    #[test]
    fn test_buffer_grows_geometrically() {
        let mut transducer = FoldingTransducer::new();

        // 100 × 'é' = 200 bytes, needs 400
        let medium = "é".repeat(100);
        assert_eq!(transducer.fold(&medium), "e".repeat(100));
        assert_eq!(transducer.capacity(), 512);
        assert_eq!(transducer.grow_count(), 1);

        // Shorter token reuses the buffer
        assert_eq!(transducer.fold("é"), "e");
        assert_eq!(transducer.capacity(), 512);
        assert_eq!(transducer.grow_count(), 1);

        // 1000 bytes, needs 2000
        let long = "é".repeat(500);
        transducer.fold(&long);
        assert_eq!(transducer.capacity(), 2048);
        assert_eq!(transducer.grow_count(), 2);
    }

    #[test]
    fn test_plain_long_token_does_not_grow() {
        let mut transducer = FoldingTransducer::new();
        let long = "a".repeat(10_000);
        transducer.fold(&long);
        assert_eq!(transducer.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn test_with_capacity_rounds_up() {
        assert_eq!(FoldingTransducer::with_capacity(0).capacity(), 256);
        assert_eq!(FoldingTransducer::with_capacity(256).capacity(), 256);
        assert_eq!(FoldingTransducer::with_capacity(257).capacity(), 512);
        assert_eq!(FoldingTransducer::with_capacity(3000).capacity(), 4096);
    }

    #[test]
    fn test_fold_token_in_place() {
        let mut transducer = FoldingTransducer::new();

        let mut token = String::from("Ἀθῆναι");
        assert!(transducer.fold_token(&mut token));
        assert_eq!(token, "Αθηναι");

        let mut untouched = String::from("athens");
        assert!(!transducer.fold_token(&mut untouched));
        assert_eq!(untouched, "athens");
    }

    #[test]
    fn test_fold_str() {
        assert!(matches!(fold_str("word"), Cow::Borrowed("word")));
        assert_eq!(fold_str("œuvre"), "oeuvre");
        assert_eq!(fold_str("“quoted”"), "\"quoted\"");
    }

    #[test]
    fn test_clone_keeps_reserved_buffer() {
        let mut transducer = FoldingTransducer::new();
        transducer.fold(&"é".repeat(500));
        transducer.fold("é");
        assert_eq!(transducer.capacity(), 2048);

        let mut copy = transducer.clone();
        assert_eq!(copy.capacity(), 2048);
        assert_eq!(copy.grow_count(), transducer.grow_count());
        assert!(copy.output.capacity() >= copy.capacity());

        let before = copy.output.as_ptr();
        let folded = copy.fold(&"é".repeat(450)).len();
        assert_eq!(folded, 450);
        assert_eq!(copy.output.as_ptr(), before);
        assert_eq!(copy.capacity(), 2048);
        assert_eq!(copy.grow_count(), 1);
    }

    #[test]
    fn test_fresh_clone_is_backed() {
        let copy = FoldingTransducer::new().clone();
        assert_eq!(copy.capacity(), INITIAL_CAPACITY);
        assert!(copy.output.capacity() >= INITIAL_CAPACITY);
    }
}
