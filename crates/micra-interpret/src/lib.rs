//! micra-interpret
//!
//! The breakpoint interpreter: maps organism + antibiotic + MIC (or a
//! qualitative S/I/R) to a CLSI interpretive category. Never throws on
//! bad input: an uninterpretable entry becomes `NA` with a warning so
//! the rest of the panel still processes.

pub mod interpret;
pub mod mic;
