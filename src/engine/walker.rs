//! Resynchronizing walker (phase 2)
//!
//! From the anchor point onward the walker consumes both streams line by
//! line, carrying a binary [`SyncState`] and a one-line lookahead into the
//! source stream.
//!
//! ## Algorithm overview
//!
//! While the streams match, every step advances the lookahead pair
//! `(current, next)` and compares the freshly read "other" line against
//! `current`. On a mismatch the walk flips to [`SyncState::Diverged`] and,
//! for each subsequent "other" line, resolves in priority order:
//!
//! 1. the line equals `current` — the divergence was a pure insertion; the
//!    pending block closes at the current position without consuming a
//!    source line;
//! 2. the line equals `next` — the divergence replaced the current source
//!    line; the pending block closes and the walk consumes one extra source
//!    line;
//! 3. otherwise the line joins the pending block.
//!
//! The asymmetry between 1 and 2 is what anchors a pure insertion to the
//! line *after* the insertion point while a replacement is anchored to the
//! replaced line's own index. Downstream consumers rely on it.
//!
//! The loop stops when the "other" stream is exhausted; source exhaustion
//! only ends the matching advance (one final pass still runs so a trailing
//! "other" line is captured). Trailing source content with no counterpart in
//! the "other" stream therefore produces no block.
//!
//! ## Debug logging
//!
//! Divergence and resynchronization transitions are traced with the
//! `debug_log!` macro, compiled in with the `debug_walk` feature flag:
//!
//! ```bash
//! cargo run --features debug_walk -- compare old.xml new.xml
//! ```

use crate::engine::block::ReplacementBlock;
use crate::engine::comparator::trimmed_eq;
use crate::engine::debug_log;
use crate::engine::line_reader::LineReader;
use std::io::BufRead;

/// Alignment state of the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Matching,
    Diverged,
}

/// Walk both streams from the given 1-based start lines and collect the
/// replacement blocks for every divergence that resynchronizes (or that runs
/// to the end of the "other" stream).
pub fn walk<S: BufRead, O: BufRead>(
    source: &mut LineReader<S>,
    other: &mut LineReader<O>,
    src_start: usize,
    oth_start: usize,
) -> anyhow::Result<Vec<ReplacementBlock>> {
    source.skip_to_line(src_start)?;
    other.skip_to_line(oth_start)?;

    let mut blocks = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut state = SyncState::Matching;
    let mut position = src_start - 1;

    let mut current: Option<String> = None;
    let mut next = source.read_line()?;
    let mut walking = true;

    while walking {
        if state == SyncState::Matching {
            current = next.take();
            if current.is_some() {
                next = source.read_line()?;
            } else {
                // Source exhausted: one final pass over the next other line,
                // then the walk ends whatever state it is in.
                walking = false;
            }
            position += 1;
        }

        let Some(oth_line) = other.read_line()? else {
            break;
        };

        if state == SyncState::Matching {
            if trimmed_eq(current.as_deref(), Some(&oth_line)) {
                continue;
            }

            debug_log!("walker: diverged at source line {position} on {oth_line:?}");
            state = SyncState::Diverged;
        }

        if trimmed_eq(current.as_deref(), Some(&oth_line)) {
            // The current source line reappeared: pure insertion resolved.
            close_block(&mut blocks, position, &mut pending);
            state = SyncState::Matching;
            debug_log!("walker: resynchronized on current line, position {position}");
        } else if trimmed_eq(next.as_deref(), Some(&oth_line)) {
            // The lookahead reappeared: the block replaced the current
            // source line, which is consumed on the way out.
            close_block(&mut blocks, position, &mut pending);
            state = SyncState::Matching;
            next = source.read_line()?;
            position += 1;
            debug_log!("walker: resynchronized on lookahead, position {position}");
        } else {
            pending.push(oth_line);
        }
    }

    close_block(&mut blocks, position, &mut pending);

    Ok(blocks)
}

/// Emit the pending buffer as a block at `position` and clear it. Empty
/// buffers are discarded, not emitted.
fn close_block(blocks: &mut Vec<ReplacementBlock>, position: usize, pending: &mut Vec<String>) {
    if pending.is_empty() {
        return;
    }

    blocks.push(ReplacementBlock::new(position, std::mem::take(pending)));
}
