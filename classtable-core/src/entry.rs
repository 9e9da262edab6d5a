use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// Digits and word boundaries are ASCII only, entries are written in ASCII shorthand.
static CODE_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new("([LTP]-[0-9]{2}B[0-9]+[A-Z]+[0-9]+)").unwrap());
static KEY_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new("(?-u:\\b)[0-9]{2}B[0-9]+[A-Z]+[0-9]+(?-u:\\b)").unwrap());
static BATCH_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new("([0-9]{2}A[0-9]{2}(?:,[0-9]{2}A[0-9]{2})*)").unwrap());
static TEACHER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("\\(([A-Z]{2,4})\\)").unwrap());
static ROOM_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new("(?i)(?-u:\\b)(LT|CR|TR|LAB|CL)[- ]?[0-9]+(?:_[0-9]+)?(?-u:\\b)").unwrap()
});
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("\\s+").unwrap());

/// Fields found in a single timetable entry such as `P-25B17CI471 24A12 (HSL) CL9_1`.
///
/// Every field is looked up on its own, so any of them may be missing without affecting the
/// others.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDetails {
  /// Subject code including the session type prefix, e.g. `L-25B11CI413`.
  pub subject_code: Option<String>,
  /// Comma separated batch list as written, e.g. `24A11,24A12,24A13`.
  pub batches: Option<String>,
  /// Faculty initials without the parentheses.
  pub teacher: Option<String>,
  /// Room with whitespace removed, e.g. `LT3` or `CL9_1`.
  pub classroom: Option<String>,
  pub is_lab: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionKind {
  Lecture,
  Tutorial,
  Practical,
}

impl ParsedDetails {
  /// Session type taken from the first letter of the subject code.
  pub fn kind(&self) -> Option<SessionKind> {
    match self.subject_code.as_deref()?.chars().next()? {
      'L' => Some(SessionKind::Lecture),
      'T' => Some(SessionKind::Tutorial),
      'P' => Some(SessionKind::Practical),
      _ => None,
    }
  }
}

impl Display for SessionKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      SessionKind::Lecture => "Lecture",
      SessionKind::Tutorial => "Tutorial",
      SessionKind::Practical => "Practical",
    })
  }
}

pub fn parse(entry: &str) -> ParsedDetails {
  let subject_code = first_group(&CODE_REGEX, entry);
  let batches = first_group(&BATCH_REGEX, entry);
  let teacher = first_group(&TEACHER_REGEX, entry);
  let classroom = ROOM_REGEX
    .find(entry)
    .map(|room| WHITESPACE_REGEX.replace_all(room.as_str(), "").into_owned());

  let is_lab = classroom
    .as_deref()
    .is_some_and(|room| room.to_lowercase().contains("lab"))
    || entry.contains("LAB")
    || entry.contains("P-");

  ParsedDetails {
    subject_code,
    batches,
    teacher,
    classroom,
    is_lab,
  }
}

/// Subject code without the session type prefix, used as key for the subject names.
pub fn subject_key(entry: &str) -> Option<&str> {
  KEY_REGEX.find(entry).map(|key| key.as_str())
}

fn first_group(regex: &Regex, value: &str) -> Option<String> {
  regex
    .captures(value)
    .and_then(|captures| captures.get(1))
    .map(|group| group.as_str().to_string())
}
