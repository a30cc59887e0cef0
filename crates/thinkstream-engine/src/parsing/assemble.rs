use super::types::{Block, Segment, SegmentKind};

/// Turns segments into the final block list in one stable pass.
///
/// Adjacent text segments are merged, empty text is dropped, and every think
/// segment is kept, including empty ones.
pub fn assemble(input: &str, segments: &[Segment]) -> Vec<Block> {
    let mut out: Vec<Block> = Vec::with_capacity(segments.len());

    for seg in segments {
        let content = seg.span.slice(input);
        match seg.kind {
            SegmentKind::Text => {
                if content.is_empty() {
                    continue;
                }
                if let Some(Block::Text { content: prev }) = out.last_mut() {
                    prev.push_str(content);
                } else {
                    out.push(Block::text(content));
                }
            }
            SegmentKind::Think(status) => out.push(Block::think(content, status)),
        }
    }

    out
}
