//! This module implements the script buffer: the ordered list of lines
//! that becomes the macro file handed to the external program.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::*;
use serde::{Deserialize, Serialize};

use crate::block::Block;

/// Default filename for generated scripts.
pub const DEFAULT_SCRIPT_NAME: &str = "script_out.txt";

/// The script under construction. Owned and passed around explicitly;
/// there is exactly one writer in the intended usage pattern, so no
/// synchronization exists or is needed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Script {
  /// The output lines, in execution order.
  lines: Vec<String>
}

impl Script {
  /// Returns an empty script buffer.
  pub fn new() -> Self {
    return Self::default();
  }

  /// Appends a single line to the buffer.
  pub fn append_line<S: Into<String>>(&mut self, line: S) {
    self.lines.push(line.into());
  }

  /// Appends many lines to the buffer, preserving their order.
  pub fn append_lines<I>(&mut self, lines: I)
  where I: IntoIterator, I::Item: Into<String> {
    self.lines.extend(lines.into_iter().map(|l| l.into()));
  }

  /// Renders a command block and appends its lines to the buffer.
  pub fn append_block(&mut self, block: Block) {
    self.append_lines(block.render());
  }

  /// The buffered lines, in order.
  pub fn lines(&self) -> &[String] {
    return &self.lines;
  }

  /// Number of buffered lines.
  pub fn len(&self) -> usize {
    return self.lines.len();
  }

  /// True if nothing has been appended (or everything was cleared).
  pub fn is_empty(&self) -> bool {
    return self.lines.is_empty();
  }

  /// Prints every buffered line to standard output, in order.
  pub fn display_lines(&self) {
    for line in self.lines.iter() {
      println!("{}", line);
    }
  }

  /// Writes the buffer to a file, one line per `\n`, plus one trailing
  /// blank line. Overwrites whatever was at the path. Not atomic.
  pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);
    for line in self.lines.iter() {
      writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    out.flush()?;
    info!("script lines written to: {}", path.as_ref().display());
    return Ok(());
  }

  /// Discards all buffered lines.
  pub fn clear_lines(&mut self) {
    self.lines.clear();
    debug!("script lines cleared");
  }

  /// Clears the buffer and deletes the output file at `path` if present.
  /// Deletion failures are logged and swallowed; a missing file is fine.
  pub fn hard_reset<P: AsRef<Path>>(&mut self, path: P) {
    self.clear_lines();
    let path = path.as_ref();
    if path.exists() {
      if let Err(e) = std::fs::remove_file(path) {
        error!("could not delete {}: {}", path.display(), e);
      }
    }
  }
}
