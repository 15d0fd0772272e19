//! Tests for merging labeled blocks into a busy timeline.

use chrono::{DateTime, TimeZone, Utc};
use mutual_availability::{combine_blockers, merge_blocks, Block, Label};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 7, 20, hour, min, 0).unwrap()
}

fn block(start: (u32, u32), end: (u32, u32), label: Label) -> Block<DateTime<Utc>> {
    Block::new(at(start.0, start.1), at(end.0, end.1), label)
}

// ── Basic shapes ────────────────────────────────────────────────────────────

#[test]
fn empty_list_merges_to_empty() {
    let merged: Vec<Block<DateTime<Utc>>> = merge_blocks(vec![]);
    assert!(merged.is_empty());
}

#[test]
fn single_block_is_unchanged() {
    let merged = merge_blocks(vec![block((12, 0), (12, 30), Label::PartyA)]);
    assert_eq!(merged, vec![block((12, 0), (12, 30), Label::PartyA)]);
}

#[test]
fn touching_blocks_merge_and_are_relabeled() {
    // 12:00-12:30 (A) and 12:30-13:00 (B) touch at 12:30 → 12:00-13:00 (merged)
    let merged = merge_blocks(vec![
        block((12, 0), (12, 30), Label::PartyA),
        block((12, 30), (13, 0), Label::PartyB),
    ]);
    assert_eq!(merged, vec![block((12, 0), (13, 0), Label::Merged)]);
}

#[test]
fn chain_of_touching_blocks_merges_into_one() {
    let merged = merge_blocks(vec![
        block((12, 0), (12, 30), Label::PartyA),
        block((12, 30), (13, 0), Label::PartyB),
        block((13, 0), (13, 30), Label::PartyA),
    ]);
    assert_eq!(merged, vec![block((12, 0), (13, 30), Label::Merged)]);
}

#[test]
fn partially_overlapping_blocks_merge() {
    let merged = merge_blocks(vec![
        block((10, 0), (11, 30), Label::PartyA),
        block((11, 0), (12, 0), Label::PartyB),
    ]);
    assert_eq!(merged, vec![block((10, 0), (12, 0), Label::Merged)]);
}

// ── Containment ─────────────────────────────────────────────────────────────

#[test]
fn large_block_swallows_contained_blocks_and_keeps_label() {
    //      12         13         14
    //   A   |---------------------|
    //   B         |----|
    //   B                    |----|
    let merged = merge_blocks(vec![
        block((12, 0), (14, 0), Label::PartyA),
        block((12, 30), (13, 0), Label::PartyB),
        block((13, 30), (14, 0), Label::PartyB),
    ]);
    assert_eq!(merged, vec![block((12, 0), (14, 0), Label::PartyA)]);
}

#[test]
fn contained_block_does_not_shrink_accumulator() {
    // Overlap-first logic would turn 12:00-14:00 into 12:00-12:45 here.
    let merged = merge_blocks(vec![
        block((12, 0), (14, 0), Label::PartyA),
        block((12, 15), (12, 45), Label::PartyB),
        block((15, 0), (16, 0), Label::PartyB),
    ]);
    assert_eq!(
        merged,
        vec![
            block((12, 0), (14, 0), Label::PartyA),
            block((15, 0), (16, 0), Label::PartyB),
        ]
    );
}

#[test]
fn identical_blocks_from_both_parties_collapse() {
    let merged = merge_blocks(vec![
        block((12, 0), (12, 30), Label::PartyA),
        block((12, 0), (12, 30), Label::PartyB),
    ]);
    assert_eq!(merged, vec![block((12, 0), (12, 30), Label::PartyA)]);
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn unsorted_input_is_sorted_and_gaps_preserved() {
    let merged = merge_blocks(combine_blockers(
        &[(at(15, 0), at(16, 0)), (at(9, 0), at(10, 0))],
        &[(at(12, 0), at(13, 0))],
    ));
    assert_eq!(
        merged,
        vec![
            block((9, 0), (10, 0), Label::PartyA),
            block((12, 0), (13, 0), Label::PartyB),
            block((15, 0), (16, 0), Label::PartyA),
        ]
    );
}

#[test]
fn merged_timeline_is_strictly_separated() {
    let merged = merge_blocks(combine_blockers(
        &[(at(9, 0), at(9, 45)), (at(10, 0), at(11, 0)), (at(13, 0), at(14, 0))],
        &[(at(9, 30), at(10, 0)), (at(10, 30), at(12, 0)), (at(12, 1), at(12, 2))],
    ));
    for pair in merged.windows(2) {
        assert!(pair[0].end < pair[1].start, "{:?} touches {:?}", pair[0], pair[1]);
    }
    assert_eq!(merged.len(), 3);
    assert_eq!((merged[0].start, merged[0].end), (at(9, 0), at(12, 0)));
}

#[test]
fn merging_twice_is_idempotent() {
    let once = merge_blocks(combine_blockers(
        &[(at(9, 0), at(10, 0)), (at(9, 30), at(11, 0))],
        &[(at(11, 0), at(11, 30)), (at(14, 0), at(15, 0))],
    ));
    let twice = merge_blocks(once.clone());
    assert_eq!(once, twice);
}
