//! Engine tests.
//!
//! - `scenarios`: accept/reject verdicts for representative inputs
//! - `parser`: step traces, rejection details and engine invariants
