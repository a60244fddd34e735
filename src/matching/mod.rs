//! Vertex balancing (Eulerization) by greedy pairing.
//!
//! - [`greedy_balancing`] — pairs unbalanced vertices cheapest-first
//!
//! # Limitation
//!
//! The pairing is a greedy approximation of the minimum-weight T-join, not
//! an exact matching. Typical overhead is small on road-like graphs but no
//! bound is guaranteed.

mod greedy;

pub use greedy::greedy_balancing;
