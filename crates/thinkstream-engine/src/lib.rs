pub mod message;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use message::{is_thinking, reasoning_text, visible_text};
pub use parsing::{
    Block, IncrementalParser, Segment, SegmentKind, ThinkStatus, parse_blocks, parse_segments,
};
