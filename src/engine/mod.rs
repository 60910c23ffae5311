//! Deterministic pricing & risk decision engine
//!
//! Pure, synchronous transformation from numeric business inputs to a
//! priced recommendation, profit scenarios and a rule-based risk
//! assessment. No I/O, no shared state; safe to call concurrently.

pub mod market;
pub mod pipeline;
pub mod range;
pub mod recommendation;
pub mod risk;
pub mod scenarios;

pub use pipeline::recommend;
