//! Step-by-step recording of the pair scan.
//!
//! A [`Trace`] holds one [`Step`] per visited element together with a
//! snapshot of the value map as it stood before that step acted. Traces
//! serialize to JSON for rendering by a visualiser.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

use crate::finder::{Complement, Pair, Scan};

/// What a step did with the current element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepAction {
    /// The complement had been seen at `first`; the scan stops here
    Found {
        /// Stored index of the complement
        first: usize,
    },
    /// The value was recorded at this index
    Inserted,
    /// The value was already recorded at an earlier index and kept there
    SkippedDuplicate,
}

/// One visited element.
#[derive(Debug, Clone, Serialize)]
pub struct Step<T> {
    /// 1-based step number
    pub step: usize,
    /// Position of the element
    pub index: usize,
    /// Value at `index`
    pub num: T,
    /// `target - num`, absent when not representable
    pub complement: Option<T>,
    /// Value map before this step acted, in insertion order
    pub seen: IndexMap<T, usize>,
    /// Outcome of the step
    pub action: StepAction,
    /// Human-readable summary
    pub description: String,
}

/// A full recording of one scan.
#[derive(Debug, Clone, Serialize)]
pub struct Trace<T> {
    /// Target sum
    pub target: T,
    /// Steps in scan order
    pub steps: Vec<Step<T>>,
    /// Same value [`find_pair`](crate::find_pair) returns
    pub result: Option<Pair>,
}

// Map comparison needs `T: Hash + Eq`, which derive cannot express
impl<T: Hash + Eq> PartialEq for Step<T> {
    fn eq(&self, other: &Self) -> bool {
        self.step == other.step
            && self.index == other.index
            && self.num == other.num
            && self.complement == other.complement
            && self.seen == other.seen
            && self.action == other.action
            && self.description == other.description
    }
}

impl<T: Hash + Eq> Eq for Step<T> {}

impl<T: Hash + Eq> PartialEq for Trace<T> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target && self.steps == other.steps && self.result == other.result
    }
}

impl<T: Hash + Eq> Eq for Trace<T> {}

impl<T> Trace<T> {
    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no element was visited
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last recorded step
    pub fn last_step(&self) -> Option<&Step<T>> {
        self.steps.last()
    }
}

/// Run the scan and record every step.
///
/// Recording stops at the first match, exactly where
/// [`find_pair`](crate::find_pair) returns.
///
/// Every step owns a full copy of the value map, so a trace over `n`
/// elements holds O(n²) entries. Use it on display-sized inputs; for large
/// inputs call [`find_pair`](crate::find_pair) directly.
pub fn trace_pair<T: Complement>(sequence: &[T], target: T) -> Trace<T> {
    let mut seen: IndexMap<T, usize> = IndexMap::new();
    let mut steps = Vec::new();
    let mut result = None;

    for visit in Scan::new(sequence, target) {
        let snapshot = seen.clone();
        let complement_text = match visit.complement {
            Some(c) => format!("complement {:?}", c),
            None => "complement out of range".to_string(),
        };

        let (action, description) = if let Some(first) = visit.matched {
            result = Some(Pair::new(first, visit.index));
            (
                StepAction::Found { first },
                format!(
                    "nums[{}] = {:?}: {} seen at index {}; return [{}, {}]",
                    visit.index, visit.value, complement_text, first, first, visit.index
                ),
            )
        } else if visit.inserted {
            seen.insert(visit.value, visit.index);
            (
                StepAction::Inserted,
                format!(
                    "nums[{}] = {:?}: {} not seen; record {:?} -> {}",
                    visit.index, visit.value, complement_text, visit.value, visit.index
                ),
            )
        } else {
            let earlier = seen.get(&visit.value).copied().unwrap_or(visit.index);
            (
                StepAction::SkippedDuplicate,
                format!(
                    "nums[{}] = {:?}: {} not seen; {:?} already recorded at index {}",
                    visit.index, visit.value, complement_text, visit.value, earlier
                ),
            )
        };

        steps.push(Step {
            step: steps.len() + 1,
            index: visit.index,
            num: visit.value,
            complement: visit.complement,
            seen: snapshot,
            action,
            description,
        });

        if result.is_some() {
            break;
        }
    }

    Trace {
        target,
        steps,
        result,
    }
}
