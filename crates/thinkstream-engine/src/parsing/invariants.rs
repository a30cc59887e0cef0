use super::{
    span::Span,
    types::{Block, Segment, SegmentKind, ThinkStatus},
};

/// Validates segment-level parser output against its input.
///
/// Asserts that:
/// - Segments, together with their boundary tags, tile the input exactly
/// - Each boundary tag abuts its content span
/// - At most one think segment is open, and only as the last segment
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(input: &str, segments: &[Segment]) {
    let mut cursor = 0;
    for (i, seg) in segments.iter().enumerate() {
        let outer = seg.outer();
        assert!(
            outer.start >= cursor,
            "segment {i} overlaps previous: {outer:?} starts before {cursor}"
        );
        assert_eq!(
            outer.start, cursor,
            "gap before segment {i}: {:?} not covered",
            Span::new(cursor, outer.start)
        );
        assert!(
            seg.span.start <= seg.span.end && seg.span.end <= input.len(),
            "segment {i} span out of bounds: {:?} (input len: {})",
            seg.span,
            input.len()
        );
        if let Some(open) = seg.open_tag {
            assert_eq!(open.end, seg.span.start, "open tag detached in segment {i}");
        }
        if let Some(close) = seg.close_tag {
            assert_eq!(close.start, seg.span.end, "close tag detached in segment {i}");
        }
        match seg.kind {
            SegmentKind::Text => assert!(
                seg.open_tag.is_none() && seg.close_tag.is_none(),
                "text segment {i} carries boundary tags"
            ),
            SegmentKind::Think(ThinkStatus::Closed) => assert!(
                seg.open_tag.is_some() && seg.close_tag.is_some(),
                "closed think segment {i} missing a boundary tag"
            ),
            SegmentKind::Think(ThinkStatus::Open) => {
                assert!(
                    seg.close_tag.is_none(),
                    "open think segment {i} has a close tag"
                );
                assert_eq!(
                    i + 1,
                    segments.len(),
                    "open think segment {i} is not last"
                );
            }
        }
        cursor = outer.end;
    }
    assert_eq!(
        cursor,
        input.len(),
        "input tail {:?} not covered",
        Span::new(cursor, input.len())
    );
}

/// Validates the assembled block list.
///
/// Asserts that text blocks are never empty or adjacent, and that an open
/// think block, if any, is the last block.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_blocks(blocks: &[Block]) {
    for (i, block) in blocks.iter().enumerate() {
        match block {
            Block::Text { content } => {
                assert!(!content.is_empty(), "empty text block at {i}");
                if i > 0 {
                    assert!(
                        blocks[i - 1].is_think(),
                        "adjacent text blocks at {} and {i}",
                        i - 1
                    );
                }
            }
            Block::Think { .. } => {
                if block.is_open() {
                    assert_eq!(i + 1, blocks.len(), "open think block at {i} is not last");
                }
            }
        }
    }
}
