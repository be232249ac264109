//! This module implements the small set of reusable argument checks that
//! every command builder funnels through. Each check names the offending
//! parameter and its allowed set in the error it produces, and builders
//! run all of their checks before touching the script buffer.

use std::path::Path;

use crate::errors::MacroError;

/// Shorthand for the invalid-argument variant.
fn bad(msg: String) -> MacroError {
  return MacroError::InvalidArgument(msg);
}

/// Checks that an index is 1 or greater.
pub fn nonzero_index(param: &str, value: i64) -> Result<(), MacroError> {
  if value < 1 {
    return Err(bad(format!(
      "`{}` should be an integer value greater than 0, got {}",
      param, value
    )));
  }
  return Ok(());
}

/// Checks that an index is `min` or greater. Some slots reserve the low
/// indices (e.g. frame 1 is the reference frame and cannot be edited).
pub fn index_at_least(
  param: &str,
  value: i64,
  min: i64
) -> Result<(), MacroError> {
  if value < min {
    return Err(bad(format!(
      "`{}` should be an integer value of {} or greater, got {}",
      param, min, value
    )));
  }
  return Ok(());
}

/// Checks that an index is 1 or greater, or exactly -1 (the grammar's
/// "all/none" marker).
pub fn index_or_all(param: &str, value: i64) -> Result<(), MacroError> {
  if value != -1 && value < 1 {
    return Err(bad(format!(
      "`{}` should be greater than 0 or -1, got {}",
      param, value
    )));
  }
  return Ok(());
}

/// Checks that a value is strictly positive.
pub fn positive(param: &str, value: f64) -> Result<(), MacroError> {
  if !(value > 0.0) {
    return Err(bad(format!(
      "`{}` should be greater than 0, got {}",
      param, value
    )));
  }
  return Ok(());
}

/// Checks that a value is zero or greater.
pub fn non_negative(param: &str, value: f64) -> Result<(), MacroError> {
  if !(value >= 0.0) {
    return Err(bad(format!(
      "`{}` should not be negative, got {}",
      param, value
    )));
  }
  return Ok(());
}

/// Checks that a value lies in a closed interval.
pub fn in_range(
  param: &str,
  value: f64,
  lo: f64,
  hi: f64
) -> Result<(), MacroError> {
  if !(lo <= value && value <= hi) {
    return Err(bad(format!(
      "`{}` should be in the range [{}, {}], got {}",
      param, lo, hi, value
    )));
  }
  return Ok(());
}

/// Checks that a value lies strictly between two bounds.
pub fn strictly_between(
  param: &str,
  value: f64,
  lo: f64,
  hi: f64
) -> Result<(), MacroError> {
  if !(lo < value && value < hi) {
    return Err(bad(format!(
      "`{}` should be between {} and {} exclusive, got {}",
      param, lo, hi, value
    )));
  }
  return Ok(());
}

/// Checks an integer-coded option against a 0..=max domain.
pub fn at_most(param: &str, value: u32, max: u32) -> Result<(), MacroError> {
  if value > max {
    return Err(bad(format!(
      "`{}` should be one of 0 through {}, got {}",
      param, max, value
    )));
  }
  return Ok(());
}

/// Checks that a declared element count matches the actual list length.
pub fn count_matches(
  param: &str,
  declared: usize,
  actual: usize
) -> Result<(), MacroError> {
  if declared != actual {
    return Err(bad(format!(
      "`{}` declares {} elements but {} were given",
      param, declared, actual
    )));
  }
  return Ok(());
}

/// Checks that a list is not empty.
pub fn not_empty(param: &str, len: usize) -> Result<(), MacroError> {
  if len == 0 {
    return Err(bad(format!("`{}` should not be empty", param)));
  }
  return Ok(());
}

/// Checks that a referenced input file exists on disk.
pub fn existing_file(path: &Path) -> Result<(), MacroError> {
  if !path.is_file() {
    return Err(MacroError::MissingFile(path.to_path_buf()));
  }
  return Ok(());
}
