use std::collections::HashMap;

use anyhow::anyhow;
use tracing::debug;

use crate::entry::subject_key;

const BUILTIN: [(&str, &str); 12] = [
  ("25B11CI411", "Operating Systems"),
  ("25B11CI412", "Design and Analysis of Algorithms"),
  ("25B11CI413", "Database Management Systems"),
  ("25B11CI414", "Computer Networks"),
  ("25B11GE411", "Environmental Studies"),
  ("25B1WHS434", "Financial Management"),
  ("25B1WCI431", "Web Technology"),
  ("25B17CI471", "Operating Systems Lab"),
  ("25B17CI472", "Algorithms Lab"),
  ("25B17CI473", "Database Management Systems Lab"),
  ("25B17CI476", "Computer Networks Lab"),
  ("25B1WCI471", "Web Technology Lab"),
];

/// Maps subject codes (without the session type prefix) to display names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subjects {
  names: HashMap<String, String>,
}

impl Subjects {
  pub fn builtin() -> Self {
    Self {
      names: BUILTIN
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect(),
    }
  }

  /// Reads a JSON object of `"code": "name"` pairs.
  pub fn from_json(json: &str) -> anyhow::Result<Self> {
    let names: HashMap<String, String> =
      serde_json::from_str(json).map_err(|err| anyhow!("Invalid subject table: {}", err))?;

    Ok(Self { names })
  }

  pub fn name(&self, code: &str) -> Option<&str> {
    self.names.get(code).map(String::as_str)
  }

  /// Looks up the subject of a raw timetable entry.
  pub fn lookup(&self, entry: &str) -> Option<&str> {
    let key = subject_key(entry)?;
    let name = self.name(key);

    if name.is_none() {
      debug!("No subject name for code {}", key);
    }

    name
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}

impl Default for Subjects {
  fn default() -> Self {
    Self::builtin()
  }
}
