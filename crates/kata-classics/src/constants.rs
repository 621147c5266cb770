//! Solver related constants

// =============================================================================
// Digit chain parameters
// =============================================================================

/// Numeric base of a digit chain
pub const DIGIT_BASE: u8 = 10;

/// Maximum chain length accepted by the recursive adder
///
/// Longer inputs are rejected upfront with `RecursionLimitExceeded` instead
/// of risking stack exhaustion. The iterative adder has no such bound.
#[cfg(not(test))]
pub const MAX_RECURSION_DEPTH: usize = 4096;

/// Maximum chain length accepted by the recursive adder - reduced so the
/// limit is cheap to exercise in unit tests
#[cfg(test)]
pub const MAX_RECURSION_DEPTH: usize = 64;
