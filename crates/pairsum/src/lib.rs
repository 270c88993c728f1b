//! # Pairsum
//!
//! Find two positions in a sequence whose values add up to a target.
//!
//! The scan keeps a map from each value seen so far to the index where it
//! first appeared. Every element looks up its complement (`target - value`)
//! before being recorded, so the first hit is the earliest pair by its second
//! position.
//!
//! ## Layers
//!
//! - **Finder**: typed, infallible scan over any primitive integer slice
//! - **Invoke**: validates dynamically-typed [`Value`] arguments, then scans
//! - **Trace**: records every step of the scan for display
//!
//! ```
//! use pairsum::{find_pair, Pair};
//!
//! assert_eq!(find_pair(&[2, 7, 11, 15], 9), Some(Pair::new(0, 1)));
//! assert_eq!(find_pair(&[5], 10), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod finder;
pub mod invoke;
pub mod trace;
pub mod value;

// Re-export main types
pub use context::FinderContext;
pub use error::{PairSumError, Result};
pub use finder::{find_all_pairs, find_pair, find_pair_with, Complement, Pair};
pub use invoke::{find_pair_args, find_pair_value};
pub use trace::{trace_pair, Step, StepAction, Trace};
pub use value::Value;

/// Pairsum version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
