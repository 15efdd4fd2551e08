//! Paths piped on standard input.

use std::io::{self, BufRead, IsTerminal};

use miette::{IntoDiagnostic, Result};
use tracing::debug;

/// Reads paths from stdin unless it is a terminal.
pub fn piped_paths() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let paths = read_paths(stdin.lock()).into_diagnostic()?;
    debug!("Read {} paths from stdin", paths.len());
    Ok(paths)
}

/// One path per line. A trailing `\r` is dropped and blank lines are ignored.
pub fn read_paths(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_one_path_per_line() {
        let input = "templates\nsnippets/a.liquid\r\n\n  \nlast.md";
        let paths = read_paths(input.as_bytes()).unwrap();
        assert_eq!(paths, vec!["templates", "snippets/a.liquid", "  ", "last.md"]);
    }

    #[test]
    fn empty_input() {
        assert!(read_paths("".as_bytes()).unwrap().is_empty());
        assert!(read_paths("\n\r\n".as_bytes()).unwrap().is_empty());
    }
}
