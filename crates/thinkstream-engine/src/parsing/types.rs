use serde::{Deserialize, Serialize};

use super::span::Span;

/// Whether a think block's closing tag has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThinkStatus {
    /// No closing tag yet; the block is presumed to still be streaming in.
    Open,
    /// The matching closing tag was found.
    Closed,
}

/// One unit of parser output.
///
/// `content` is an exact substring of the input with the boundary tags
/// stripped. Tags that were not boundaries stay in the content verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Block {
    /// Plain message text. Never empty in parser output.
    Text { content: String },
    /// A reasoning region. May be empty.
    Think { content: String, status: ThinkStatus },
}

impl Block {
    pub fn text(content: impl Into<String>) -> Self {
        Block::Text {
            content: content.into(),
        }
    }

    pub fn think(content: impl Into<String>, status: ThinkStatus) -> Self {
        Block::Think {
            content: content.into(),
            status,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Block::Text { content } | Block::Think { content, .. } => content,
        }
    }

    pub fn is_think(&self) -> bool {
        matches!(self, Block::Think { .. })
    }

    /// True only for a think block still waiting for its closing tag.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            Block::Think {
                status: ThinkStatus::Open,
                ..
            }
        )
    }
}

/// The kind of a [`Segment`], mirroring [`Block`] without owned content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Text,
    Think(ThinkStatus),
}

/// A block boundary found by the state machine, before assembly.
///
/// All positions are byte spans into the parsed input, so
/// `open_tag + span + close_tag` covers exactly the source text the segment
/// was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// The content region.
    pub span: Span,
    /// The opening tag consumed as a boundary (think segments only).
    pub open_tag: Option<Span>,
    /// The closing tag consumed as a boundary (closed think segments only).
    pub close_tag: Option<Span>,
}

impl Segment {
    pub fn text(span: Span) -> Self {
        Self {
            kind: SegmentKind::Text,
            span,
            open_tag: None,
            close_tag: None,
        }
    }

    /// Full source range including any boundary tags.
    pub fn outer(&self) -> Span {
        Span::new(
            self.open_tag.map_or(self.span.start, |t| t.start),
            self.close_tag.map_or(self.span.end, |t| t.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn block_accessors() {
        let text = Block::text("hi");
        assert_eq!(text.content(), "hi");
        assert!(!text.is_think());
        assert!(!text.is_open());

        let open = Block::think("hmm", ThinkStatus::Open);
        assert!(open.is_think());
        assert!(open.is_open());

        let closed = Block::think("", ThinkStatus::Closed);
        assert!(closed.is_think());
        assert!(!closed.is_open());
        assert_eq!(closed.content(), "");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let blocks = vec![
            Block::think("plan", ThinkStatus::Closed),
            Block::text("answer"),
        ];
        let json = serde_json::to_string(&blocks).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"Think","content":"plan","status":"Closed"},{"kind":"Text","content":"answer"}]"#
        );
    }

    #[test]
    fn text_block_json_has_no_status() {
        let json = serde_json::to_value(Block::text("x")).unwrap();
        assert!(json.get("status").is_none());
    }

    #[test]
    fn deserializes_from_kind_tag() {
        let block: Block =
            serde_json::from_str(r#"{"kind":"Think","content":"a","status":"Open"}"#).unwrap();
        assert_eq!(block, Block::think("a", ThinkStatus::Open));
    }

    #[test]
    fn segment_outer_includes_boundary_tags() {
        let seg = Segment {
            kind: SegmentKind::Think(ThinkStatus::Closed),
            span: Span::new(7, 11),
            open_tag: Some(Span::new(0, 7)),
            close_tag: Some(Span::new(11, 19)),
        };
        assert_eq!(seg.outer(), Span::new(0, 19));
        assert_eq!(Segment::text(Span::new(3, 5)).outer(), Span::new(3, 5));
    }
}
