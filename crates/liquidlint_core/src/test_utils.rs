//! Test utilities for liquidlint_core.

use std::sync::{Arc, Mutex};

use crate::formatter::{Block, Stream};
use crate::reporter::Reporter;

/// Reporter that keeps every block in memory, in report order.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    blocks: Arc<Mutex<Vec<Block>>>,
}

impl MemoryReporter {
    pub fn blocks(&self) -> Vec<Block> {
        self.blocks.lock().map(|b| b.clone()).unwrap_or_default()
    }

    /// Every reported line, regardless of stream.
    pub fn all(&self) -> Vec<String> {
        self.blocks()
            .into_iter()
            .flat_map(|block| block.lines)
            .map(|line| line.text)
            .collect()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.lines_on(Stream::Stdout)
    }

    pub fn stderr(&self) -> Vec<String> {
        self.lines_on(Stream::Stderr)
    }

    fn lines_on(&self, stream: Stream) -> Vec<String> {
        self.blocks()
            .into_iter()
            .flat_map(|block| block.lines)
            .filter(|line| line.stream == stream)
            .map(|line| line.text)
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, block: &Block) {
        if let Ok(mut blocks) = self.blocks.lock() {
            blocks.push(block.clone());
        }
    }
}
