//! Labeled busy intervals and the tagger/combiner.
//!
//! Each raw `(start, end)` blocker is wrapped into a [`Block`] that remembers
//! which party it came from. The label is diagnostic only: nothing in the
//! merge or extraction logic reads it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two parties whose schedules are being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    A,
    B,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::A => f.write_str("party A"),
            Party::B => f.write_str("party B"),
        }
    }
}

/// Where a [`Block`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    PartyA,
    PartyB,
    /// Produced by combining two or more overlapping or touching blocks.
    Merged,
}

impl From<Party> for Label {
    fn from(party: Party) -> Self {
        match party {
            Party::A => Label::PartyA,
            Party::B => Label::PartyB,
        }
    }
}

/// A busy interval `[start, end]` with its diagnostic label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block<T> {
    pub start: T,
    pub end: T,
    pub label: Label,
}

impl<T> Block<T> {
    pub fn new(start: T, end: T, label: Label) -> Self {
        Self { start, end, label }
    }
}

/// Wrap one party's raw blockers into labeled blocks, keeping input order.
pub fn tag_blockers<T: Copy>(party: Party, blockers: &[(T, T)]) -> Vec<Block<T>> {
    let label = Label::from(party);
    blockers
        .iter()
        .map(|&(start, end)| Block::new(start, end, label))
        .collect()
}

/// Tag both parties' blockers and concatenate them into one list.
///
/// Party A's blocks come first, then party B's. The combined list is not
/// sorted; [`merge_blocks`](crate::merge::merge_blocks) takes care of that.
pub fn combine_blockers<T: Copy>(party_a: &[(T, T)], party_b: &[(T, T)]) -> Vec<Block<T>> {
    let mut combined = tag_blockers(Party::A, party_a);
    combined.extend(tag_blockers(Party::B, party_b));
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_keeps_per_party_order_and_labels() {
        let combined = combine_blockers(&[(30, 40), (10, 20)], &[(0, 5)]);
        assert_eq!(
            combined,
            vec![
                Block::new(30, 40, Label::PartyA),
                Block::new(10, 20, Label::PartyA),
                Block::new(0, 5, Label::PartyB),
            ]
        );
    }

    #[test]
    fn combine_of_empty_lists_is_empty() {
        let combined: Vec<Block<i64>> = combine_blockers(&[], &[]);
        assert!(combined.is_empty());
    }

    #[test]
    fn party_display_names() {
        assert_eq!(Party::A.to_string(), "party A");
        assert_eq!(Party::B.to_string(), "party B");
    }
}
