//! kata-classics - Classic interview problem solvers
//!
//! This crate provides functionality to:
//! - Find two positions in a sequence whose values sum to a target
//! - Add two numbers encoded as digit chains (least-significant digit first)
//! - Find the longest substring without repeating characters

pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use constants::*;
pub use domain::digit_chain::{DigitChain, DigitChainError, add_digit_chains};
pub use domain::pair_sum::{PairMatch, pair_sum_hash};
pub use domain::unique_window::{WindowSpan, longest_unique_len, longest_unique_span};
