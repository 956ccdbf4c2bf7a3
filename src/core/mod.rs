//! Core module tree for mathzy: error type, debug logging and the numeric functions.

#[macro_use]
pub mod debug; // gated debug logging (MATHZY_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod numeric;
