use super::{assemble::assemble, machine::BoundaryMachine, tags::TagScanner, types::Block};

/// Re-parses a growing stream buffer without re-scanning what it has seen.
///
/// The machine state after the last consumed tag token is cached. When the
/// next snapshot extends the previous one, scanning resumes at the end of that
/// token; otherwise the cache is dropped and the snapshot is parsed from the
/// start. The output is always identical to [`parse_blocks`] on the same
/// snapshot.
///
/// [`parse_blocks`]: super::parse_blocks
#[derive(Debug, Clone, Default)]
pub struct IncrementalParser {
    buffer: String,
    machine: BoundaryMachine,
    /// End of the last consumed tag token.
    resume_at: usize,
}

impl IncrementalParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the full message-so-far.
    pub fn update(&mut self, snapshot: &str) -> Vec<Block> {
        if let Some(rest) = snapshot.strip_prefix(self.buffer.as_str()) {
            self.buffer.push_str(rest);
        } else {
            log::debug!(
                "snapshot of {} bytes does not extend cached {} bytes, parsing from start",
                snapshot.len(),
                self.buffer.len()
            );
            self.reset();
            self.buffer.push_str(snapshot);
        }
        self.advance()
    }

    /// Appends a streamed chunk and parses the result.
    pub fn push(&mut self, chunk: &str) -> Vec<Block> {
        self.buffer.push_str(chunk);
        self.advance()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.machine = BoundaryMachine::new();
        self.resume_at = 0;
    }

    /// Everything received so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn advance(&mut self) -> Vec<Block> {
        let mut scanner = TagScanner::resume(&self.buffer, self.resume_at);
        for token in scanner.by_ref() {
            self.machine.push(token);
        }
        self.resume_at = scanner.position();

        let segments = self.machine.clone().finish(self.buffer.len());
        assemble(&self.buffer, &segments)
    }
}
