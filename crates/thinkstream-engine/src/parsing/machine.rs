use super::{
    span::Span,
    tags::{TagKind, TagToken},
    types::{Segment, SegmentKind, ThinkStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Text {
        /// Where the next flushed text run begins.
        text_start: usize,
    },
    Think {
        kind: TagKind,
        depth: usize,
        /// The opener that started the block; content begins at its end.
        open_tag: Span,
    },
}

/// Classifies tag tokens as block boundaries or inert content.
///
/// Feed tokens in scan order with [`push`](Self::push), then call
/// [`finish`](Self::finish) with the input length to get the segments.
///
/// | Mode  | Token                   | Effect                          |
/// |-------|-------------------------|---------------------------------|
/// | Text  | open (either kind)      | flush text, enter Think         |
/// | Text  | close (either kind)     | orphan, stays in the text run   |
/// | Think | open, same kind         | depth + 1                       |
/// | Think | close, same kind        | depth - 1, closes block at 0    |
/// | Think | either, other kind      | inert, stays in the think block |
#[derive(Debug, Clone)]
pub struct BoundaryMachine {
    mode: Mode,
    out: Vec<Segment>,
}

impl BoundaryMachine {
    pub fn new() -> Self {
        Self {
            mode: Mode::Text { text_start: 0 },
            out: vec![],
        }
    }

    pub fn push(&mut self, token: TagToken) {
        match self.mode {
            Mode::Text { text_start } => {
                if token.is_close {
                    log::trace!(
                        "orphan </{}> at {} kept as text",
                        token.kind.keyword(),
                        token.span.start
                    );
                    return;
                }
                self.flush_text(text_start, token.span.start);
                self.mode = Mode::Think {
                    kind: token.kind,
                    depth: 1,
                    open_tag: token.span,
                };
            }
            Mode::Think {
                kind,
                depth,
                open_tag,
            } => {
                if token.kind != kind {
                    log::trace!(
                        "inert <{}> at {} inside <{}> block",
                        token.kind.keyword(),
                        token.span.start,
                        kind.keyword()
                    );
                    return;
                }
                if !token.is_close {
                    self.mode = Mode::Think {
                        kind,
                        depth: depth + 1,
                        open_tag,
                    };
                    return;
                }
                if depth > 1 {
                    self.mode = Mode::Think {
                        kind,
                        depth: depth - 1,
                        open_tag,
                    };
                    return;
                }
                self.out.push(Segment {
                    kind: SegmentKind::Think(ThinkStatus::Closed),
                    span: Span::new(open_tag.end, token.span.start),
                    open_tag: Some(open_tag),
                    close_tag: Some(token.span),
                });
                self.mode = Mode::Text {
                    text_start: token.span.end,
                };
            }
        }
    }

    /// Applies end-of-input finalization and returns all segments.
    ///
    /// An unterminated think block becomes the last segment with
    /// [`ThinkStatus::Open`].
    pub fn finish(mut self, len: usize) -> Vec<Segment> {
        match self.mode {
            Mode::Text { text_start } => self.flush_text(text_start, len),
            Mode::Think { open_tag, .. } => self.out.push(Segment {
                kind: SegmentKind::Think(ThinkStatus::Open),
                span: Span::new(open_tag.end, len),
                open_tag: Some(open_tag),
                close_tag: None,
            }),
        }
        self.out
    }

    /// True while inside a think block.
    pub fn in_think(&self) -> bool {
        matches!(self.mode, Mode::Think { .. })
    }

    /// Current same-kind nesting depth; zero outside think blocks.
    pub fn depth(&self) -> usize {
        match self.mode {
            Mode::Think { depth, .. } => depth,
            Mode::Text { .. } => 0,
        }
    }

    fn flush_text(&mut self, start: usize, end: usize) {
        if end > start {
            self.out.push(Segment::text(Span::new(start, end)));
        }
    }
}

impl Default for BoundaryMachine {
    fn default() -> Self {
        Self::new()
    }
}
