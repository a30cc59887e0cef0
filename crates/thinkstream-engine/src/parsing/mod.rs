//! # Think-Block Parsing
//!
//! Splits a possibly incomplete LLM message into text and reasoning blocks so
//! reasoning can be shown as collapsible regions while the message streams in.
//!
//! ## Parsing Stages
//!
//! 1. **Tag Scanning** (`tags`): `TagScanner` yields every `<think>`,
//!    `</think>`, `<details>` and `</details>` tag, case-insensitive, with
//!    attributes skipped
//!
//! 2. **Boundary Classification** (`machine`): `BoundaryMachine` decides per
//!    token whether it is a block boundary or inert content, and emits
//!    `Segment`s with byte spans
//!
//! 3. **Assembly** (`assemble`): merges adjacent text, drops empty text and
//!    slices block contents out of the input
//!
//! ## Key Invariants
//!
//! - Parsing is total: malformed markup degrades to text, never to an error
//! - Only boundary tags are removed; every other character lands in a block
//! - An open think block can only be the last block
//! - Same-kind tags nest by depth; the other keyword is inert inside a block
//!   so `think` and `details` behave as alternate spellings of one block type
//! - Every call is a full scan; `IncrementalParser` is an optional cache that
//!   produces identical output

pub mod assemble;
pub mod incremental;
pub mod invariants;
pub mod machine;
pub mod span;
pub mod tags;
pub mod types;

#[cfg(test)]
mod tests;

pub use assemble::assemble;
pub use incremental::IncrementalParser;
pub use machine::BoundaryMachine;
pub use span::Span;
pub use tags::{TagKind, TagScanner, TagToken};
pub use types::{Block, Segment, SegmentKind, ThinkStatus};

/// Parses the full message-so-far into an ordered block list.
///
/// Callers re-invoke this with the whole buffer on every update.
pub fn parse_blocks(input: &str) -> Vec<Block> {
    assemble(input, &parse_segments(input))
}

/// Finds block boundaries without assembling, keeping byte spans.
pub fn parse_segments(input: &str) -> Vec<Segment> {
    let mut machine = BoundaryMachine::new();
    for token in TagScanner::new(input) {
        machine.push(token);
    }
    machine.finish(input.len())
}
