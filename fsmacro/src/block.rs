//! This module implements the typed command block and the one formatter
//! that turns it into script text. Builders describe what a command says;
//! rendering decides how it looks.

use std::fmt::Display;

use itertools::Itertools;

/// Total width of the banner lines, border included.
pub(crate) const BANNER_WIDTH: usize = 73;

/// Asterisks to the left of a banner title.
const TITLE_LEAD: usize = 18;

/// One command block: a human-readable banner title plus the body lines
/// mandated by the external grammar, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
  /// Title printed in the banner. Cosmetic only, never parsed.
  title: String,
  /// Body lines, in the exact order the external tool expects.
  lines: Vec<String>
}

impl Block {
  /// Starts a block with the given banner title.
  pub fn new<S: Into<String>>(title: S) -> Self {
    return Self { title: title.into(), lines: Vec::new() };
  }

  /// Appends one raw body line (a command keyword or a positional value).
  pub fn line<D: Display>(mut self, value: D) -> Self {
    self.lines.push(value.to_string());
    return self;
  }

  /// Appends a `KEY value` parameter line.
  pub fn kv<D: Display>(self, key: &str, value: D) -> Self {
    return self.line(format_args!("{} {}", key, value));
  }

  /// Renders the banner and body into script lines.
  pub fn render(&self) -> Vec<String> {
    let border = format!("#{}", "*".repeat(BANNER_WIDTH - 1));
    let mut out = Vec::with_capacity(self.lines.len() + 4);
    out.push(border.clone());
    out.push(banner_title(&self.title));
    out.push(border);
    out.push("#".to_string());
    out.extend(self.lines.iter().cloned());
    return out;
  }
}

/// Centers-ish a title into the fixed-width banner, teacher-style: a fixed
/// lead of asterisks, the title, and an asterisk fill to the right.
fn banner_title(title: &str) -> String {
  // border char + lead + two spaces around the title
  let used = 1 + TITLE_LEAD + 1 + title.len() + 1;
  if used >= BANNER_WIDTH {
    // over-long titles go out unpadded rather than truncated
    return format!("#{} {} ", "*".repeat(TITLE_LEAD), title);
  }
  return format!(
    "#{} {} {}",
    "*".repeat(TITLE_LEAD),
    title,
    "*".repeat(BANNER_WIDTH - used)
  );
}

/// Joins values with commas, as the grammar wants for index lists.
pub fn join_csv<I>(values: I) -> String
where I: IntoIterator, I::Item: Display {
  return values.into_iter().map(|v| v.to_string()).join(",");
}

/// Joins values with single spaces, as the grammar wants for coordinate
/// triplets and other inline argument runs.
pub fn join_spaced<I>(values: I) -> String
where I: IntoIterator, I::Item: Display {
  return values.into_iter().map(|v| v.to_string()).join(" ");
}
