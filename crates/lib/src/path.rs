//! Dotted path parsing.
//!
//! A dotted path is a chain of property accesses such as `model.submodel.method`.
//! The last segment names the function; everything before it names the owner.
//! A leading `this` segment refers to the root context and is dropped, so
//! `this.model.method` and `model.method` parse to the same path.
//!
//! # Example
//!
//! ```
//! use pathbind_lib::path::DottedPath;
//!
//! let path = DottedPath::parse("this.model.actions.save").unwrap();
//! assert_eq!(path.segments(), ["model", "actions", "save"]);
//! assert_eq!(path.name(), "save");
//! assert_eq!(path.owner(), ["model", "actions"]);
//! ```

use std::fmt;

use thiserror::Error;

use crate::consts::THIS_SEGMENT;

/// Errors raised when a path string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum InvalidPathError {
  #[error("path is empty")]
  Empty,

  #[error("path '{path}' names no property")]
  NoProperty { path: String },

  #[error("path '{path}' has an empty segment at position {index}")]
  EmptySegment { path: String, index: usize },

  #[error("path '{path}' contains invalid character {ch:?} in segment '{segment}'")]
  InvalidCharacter { path: String, segment: String, ch: char },

  #[error("path must be a string, got {type_name}")]
  NotAString { type_name: String },
}

/// A validated, non-empty dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DottedPath {
  segments: Vec<String>,
}

impl DottedPath {
  /// Parse and validate a dotted path string.
  ///
  /// # Errors
  ///
  /// Returns an error if the path is empty, contains an empty segment, or
  /// contains characters other than alphanumerics, `_`, `-` and `$`.
  pub fn parse(input: &str) -> Result<Self, InvalidPathError> {
    if input.is_empty() {
      return Err(InvalidPathError::Empty);
    }

    let mut segments = Vec::new();
    for (index, segment) in input.split('.').enumerate() {
      if segment.is_empty() {
        return Err(InvalidPathError::EmptySegment {
          path: input.to_string(),
          index,
        });
      }
      if let Some(ch) = segment.chars().find(|c| !is_segment_char(*c)) {
        return Err(InvalidPathError::InvalidCharacter {
          path: input.to_string(),
          segment: segment.to_string(),
          ch,
        });
      }
      segments.push(segment.to_string());
    }

    if segments.first().is_some_and(|s| s == THIS_SEGMENT) {
      segments.remove(0);
    }

    if segments.is_empty() {
      return Err(InvalidPathError::NoProperty { path: input.to_string() });
    }

    Ok(Self { segments })
  }

  /// All segments, root-most first.
  pub fn segments(&self) -> &[String] {
    &self.segments
  }

  /// The terminal segment.
  pub fn name(&self) -> &str {
    self.segments.last().map(String::as_str).unwrap_or_default()
  }

  /// Segments leading to the terminal one. Empty when the path is a single segment.
  pub fn owner(&self) -> &[String] {
    self.segments.split_last().map(|(_, owner)| owner).unwrap_or_default()
  }
}

impl fmt::Display for DottedPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.segments.join("."))
  }
}

impl std::str::FromStr for DottedPath {
  type Err = InvalidPathError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

fn is_segment_char(c: char) -> bool {
  c.is_alphanumeric() || matches!(c, '_' | '-' | '$')
}

/// Render owner segments for display, `this` standing in for the root.
pub fn display_segments(segments: &[String]) -> String {
  if segments.is_empty() {
    THIS_SEGMENT.to_string()
  } else {
    segments.join(".")
  }
}
