//! Single-pass pair scan.
//!
//! The scan remembers the first index of every value it has seen. At each
//! position it looks up `target - value` before recording the current value,
//! so an element is never paired with itself and the earliest partner wins
//! when values repeat.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::FinderContext;

/// An ordered pair of positions into the scanned sequence.
///
/// `first < second` always holds for pairs produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    /// Position of the earlier element
    pub first: usize,
    /// Position of the later element
    pub second: usize,
}

impl Pair {
    /// Create a pair from two positions.
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// The pair as a `(first, second)` tuple.
    pub fn as_tuple(self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl From<Pair> for (usize, usize) {
    fn from(pair: Pair) -> Self {
        pair.as_tuple()
    }
}

impl From<Pair> for [usize; 2] {
    fn from(pair: Pair) -> Self {
        [pair.first, pair.second]
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.first, self.second)
    }
}

/// Integer types the scan can run over.
pub trait Complement: Copy + Eq + Hash + fmt::Debug {
    /// `target - value`, or `None` when the difference is not representable.
    ///
    /// An unrepresentable difference means no element of `Self` can complete
    /// the pair.
    fn complement(target: Self, value: Self) -> Option<Self>;
}

macro_rules! impl_complement {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Complement for $ty {
                #[inline]
                fn complement(target: Self, value: Self) -> Option<Self> {
                    target.checked_sub(value)
                }
            }
        )*
    };
}

impl_complement!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// What happened at one position of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Visit<T> {
    pub index: usize,
    pub value: T,
    pub complement: Option<T>,
    /// Stored index of the complement, when it had been seen
    pub matched: Option<usize>,
    /// Whether `value` was new and got recorded
    pub inserted: bool,
}

/// Iterator over the visits of a left-to-right scan.
pub(crate) struct Scan<'a, T> {
    sequence: &'a [T],
    target: T,
    position: usize,
    seen: HashMap<T, usize>,
}

impl<'a, T: Complement> Scan<'a, T> {
    pub(crate) fn new(sequence: &'a [T], target: T) -> Self {
        Self {
            sequence,
            target,
            position: 0,
            seen: HashMap::with_capacity(sequence.len()),
        }
    }
}

impl<T: Complement> Iterator for Scan<'_, T> {
    type Item = Visit<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.position;
        let value = *self.sequence.get(index)?;
        self.position += 1;

        let complement = T::complement(self.target, value);
        // Look up before recording so an element never pairs with itself
        let matched = complement.and_then(|c| self.seen.get(&c).copied());
        let inserted = match self.seen.entry(value) {
            Entry::Vacant(slot) => {
                slot.insert(index);
                true
            }
            Entry::Occupied(_) => false,
        };

        Some(Visit {
            index,
            value,
            complement,
            matched,
            inserted,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len() - self.position;
        (remaining, Some(remaining))
    }
}

/// Find the first pair of positions whose values sum to `target`.
///
/// "First" is ordered by the second position, then by the earliest first
/// position. Returns `None` for empty and single-element sequences, and
/// whenever no pair exists.
///
/// ```
/// use pairsum::{find_pair, Pair};
///
/// assert_eq!(find_pair(&[3, 2, 4], 6), Some(Pair::new(1, 2)));
/// assert_eq!(find_pair(&[3, 3], 6), Some(Pair::new(0, 1)));
/// ```
pub fn find_pair<T: Complement>(sequence: &[T], target: T) -> Option<Pair> {
    find_pair_with(sequence, target, &FinderContext::default())
}

/// [`find_pair`] with explicit per-call options.
pub fn find_pair_with<T: Complement>(
    sequence: &[T],
    target: T,
    ctx: &FinderContext,
) -> Option<Pair> {
    let found = Scan::new(sequence, target)
        .inspect(|visit| {
            if ctx.trace {
                trace!(
                    index = visit.index,
                    value = ?visit.value,
                    complement = ?visit.complement,
                    matched = ?visit.matched,
                    "visit"
                );
            }
        })
        .find_map(|visit| visit.matched.map(|first| Pair::new(first, visit.index)));

    match found {
        Some(pair) => debug!(len = sequence.len(), target_sum = ?target, %pair, "pair found"),
        None => debug!(len = sequence.len(), target_sum = ?target, "no pair"),
    }
    found
}

/// Every pair the scan discovers, in order of the second position.
///
/// For each position `j` this yields the earliest `i < j` whose value
/// completes `target`, if any. The first entry always equals [`find_pair`].
pub fn find_all_pairs<T: Complement>(sequence: &[T], target: T) -> Vec<Pair> {
    Scan::new(sequence, target)
        .filter_map(|visit| visit.matched.map(|first| Pair::new(first, visit.index)))
        .collect()
}
