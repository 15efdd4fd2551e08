//! Destinations for rendered blocks.

use std::io::{self, Write};

use tracing::warn;

use crate::formatter::{Block, Stream};

/// Receives each block as soon as it is rendered.
pub trait Reporter: Send + Sync {
    fn report(&self, block: &Block);
}

/// Writes blocks to the process's stdout and stderr.
///
/// Both streams stay locked for the whole block, so lines of one file are
/// never split by another writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn write_block(block: &Block) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();

        for line in &block.lines {
            match line.stream {
                Stream::Stdout => writeln!(stdout, "{}", line.text)?,
                Stream::Stderr => writeln!(stderr, "{}", line.text)?,
            }
        }

        stdout.flush()?;
        stderr.flush()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, block: &Block) {
        if let Err(e) = Self::write_block(block) {
            warn!("Failed to write output: {}", e);
        }
    }
}
