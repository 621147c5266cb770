//! Longest unique window search
//!
//! This module provides functions for finding the longest contiguous run
//! of characters without a repeat. Comparison is exact and case-sensitive,
//! per `char`, so multi-byte text is never split mid-codepoint.

#[cfg(feature = "fast-hash")]
type LastSeen = rustc_hash::FxHashMap<char, usize>;

#[cfg(not(feature = "fast-hash"))]
type LastSeen = std::collections::HashMap<char, usize>;

#[cfg(feature = "fast-hash")]
type CharSet = rustc_hash::FxHashSet<char>;

#[cfg(not(feature = "fast-hash"))]
type CharSet = std::collections::HashSet<char>;

/// Span of the longest window without repeated characters
///
/// `start..end` are byte offsets into the original text, so the window can
/// be sliced back out of it; `chars` is the window length in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSpan {
    /// Byte offset of the first character in the window
    pub start: usize,
    /// Byte offset one past the last character in the window
    pub end: usize,
    /// Window length in characters
    pub chars: usize,
}

/// Length in characters of the longest substring without repeats
///
/// This is the canonical optimized sliding window: a map records the most
/// recent position of every character; when the current character was last
/// seen at or after the left boundary, the boundary jumps to one past that
/// occurrence. The maximum of `right - left + 1` over the scan is the
/// answer. O(n) time, O(min(n, alphabet)) space.
pub fn longest_unique_len(text: &str) -> usize {
    let mut last_seen = LastSeen::default();
    let mut left = 0;
    let mut max_len = 0;

    for (right, c) in text.chars().enumerate() {
        if let Some(&prev) = last_seen.get(&c)
            && prev >= left
        {
            left = prev + 1;
        }
        last_seen.insert(c, right);
        max_len = max_len.max(right - left + 1);
    }

    max_len
}

/// Longest substring without repeats, with its location
///
/// Same scan as [`longest_unique_len`], additionally reporting the span of
/// the first window that reaches the maximum length. Returns `None` for
/// empty text.
pub fn longest_unique_span(text: &str) -> Option<WindowSpan> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    let mut last_seen = LastSeen::default();
    let mut left = 0;
    let mut best: Option<(usize, usize)> = None;

    for (right, &(_, c)) in chars.iter().enumerate() {
        if let Some(&prev) = last_seen.get(&c)
            && prev >= left
        {
            left = prev + 1;
        }
        last_seen.insert(c, right);

        // Strict comparison keeps the first maximal window.
        if best.is_none_or(|(bl, br)| right - left > br - bl) {
            best = Some((left, right));
        }
    }

    let (left, right) = best?;
    Some(WindowSpan {
        start: chars[left].0,
        end: chars[right].0 + chars[right].1.len_utf8(),
        chars: right - left + 1,
    })
}

/// Brute-force variant checking every substring for uniqueness
///
/// A substring is unique when its character set is as large as the
/// substring itself. Cubic-class; kept for cross-variant agreement checks.
pub fn longest_unique_len_brute_force(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut max_len = 0;

    for i in 0..n {
        for j in (i + 1)..=n {
            let set: CharSet = chars[i..j].iter().copied().collect();
            if set.len() == j - i {
                max_len = max_len.max(j - i);
            }
        }
    }

    max_len
}
