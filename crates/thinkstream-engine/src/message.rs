//! Views over a parsed message for the layers that display or reuse it.

use crate::parsing::Block;

/// The answer with all reasoning removed: text block contents, concatenated.
pub fn visible_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|b| !b.is_think())
        .map(Block::content)
        .collect()
}

/// All reasoning contents, separated by a blank line.
pub fn reasoning_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|b| b.is_think())
        .map(Block::content)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// True while the model is still inside an unterminated think block.
pub fn is_thinking(blocks: &[Block]) -> bool {
    blocks.last().is_some_and(Block::is_open)
}
