//! Collapse labeled blocks into a sorted, non-overlapping busy timeline.
//!
//! Blocks that overlap or touch (one ends exactly when the next starts) are
//! merged. The result satisfies `merged[i].end < merged[i + 1].start` for every
//! consecutive pair.

use tracing::{debug, instrument, trace};

use crate::block::{Block, Label};
use crate::instant::Instant;

/// Merge overlapping or touching blocks into the minimal sorted set.
///
/// Blocks are stably sorted by start and swept with a single accumulator.
/// A block whose end does not extend the accumulator is swallowed and the
/// accumulator keeps its label. A block that overlaps or touches extends the
/// accumulator, which is then labeled [`Label::Merged`].
///
/// Blocks outside any search range are kept; clipping happens at extraction.
#[instrument(level = "debug", skip_all, fields(blocks = blocks.len()))]
pub fn merge_blocks<T: Instant>(mut blocks: Vec<Block<T>>) -> Vec<Block<T>> {
    blocks.sort_by_key(|block| block.start);

    let mut merged = Vec::with_capacity(blocks.len());
    let mut active: Option<Block<T>> = None;

    for block in blocks {
        let Some(current) = active else {
            active = Some(block);
            continue;
        };

        // Containment must be checked before overlap: a contained block also
        // satisfies `current.end >= block.start` and would shrink the end.
        if current.end >= block.end {
            trace!(start = ?block.start, end = ?block.end, "block contained, discarded");
            continue;
        }

        if current.end >= block.start {
            trace!(start = ?current.start, end = ?block.end, "blocks overlap, merged");
            active = Some(Block::new(current.start, block.end, Label::Merged));
        } else {
            merged.push(current);
            active = Some(block);
        }
    }

    if let Some(last) = active {
        merged.push(last);
    }

    debug!(merged = merged.len(), "busy timeline merged");
    merged
}
