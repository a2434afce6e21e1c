//! The complexity estimator.
//!
//! Classifies a source text into a coarse asymptotic bucket using lexical
//! pattern matching only. The checks run in strict priority order and the
//! first hit wins: recursion outranks nesting outranks a single loop
//! outranks the constant default.

mod loops;
mod recursion;
mod types;

pub use loops::{scan_loops, LoopScan};
pub use recursion::detect_recursion;
pub use types::Complexity;

use crate::language::Language;

/// Estimate the time complexity of `source`.
///
/// Pure and deterministic: identical input always yields the identical
/// label. The result is a guess, not an analysis - see the module docs.
pub fn estimate(source: &str, language: Language) -> Complexity {
    if detect_recursion(source, language) {
        return Complexity::Recursive;
    }

    let scan = scan_loops(source);
    if scan.nested {
        return Complexity::Quadratic;
    }
    if scan.count == 1 {
        return Complexity::Linear;
    }

    Complexity::Constant
}
