//! Line-per-block text rendering of parser output.
//!
//! Contents are `Debug`-escaped so every block stays on one line.

use crate::parsing::{Block, ThinkStatus};

fn status_label(status: ThinkStatus) -> &'static str {
    match status {
        ThinkStatus::Open => "open",
        ThinkStatus::Closed => "closed",
    }
}

/// Renders every block with its full content.
pub fn outline(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| match b {
            Block::Text { content } => format!("text {content:?}"),
            Block::Think { content, status } => {
                format!("think ({}) {content:?}", status_label(*status))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`outline`], but think blocks show only their size.
pub fn outline_collapsed(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| match b {
            Block::Text { content } => format!("text {content:?}"),
            Block::Think { content, status } => format!(
                "think ({}) [{} bytes]",
                status_label(*status),
                content.len()
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
