use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use serde::Serialize;
use time::{OffsetDateTime, UtcOffset, Weekday};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Day {
  Sun,
  Mon,
  Tue,
  Wed,
  Thu,
  Fri,
  Sat,
}

impl Day {
  /// Selector order, Sunday first.
  pub const ALL: [Day; 7] = [
    Day::Sun,
    Day::Mon,
    Day::Tue,
    Day::Wed,
    Day::Thu,
    Day::Fri,
    Day::Sat,
  ];

  pub fn code(self) -> &'static str {
    match self {
      Day::Sun => "SUN",
      Day::Mon => "MON",
      Day::Tue => "TUE",
      Day::Wed => "WED",
      Day::Thu => "THU",
      Day::Fri => "FRI",
      Day::Sat => "SAT",
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Day::Sun => "Sunday",
      Day::Mon => "Monday",
      Day::Tue => "Tuesday",
      Day::Wed => "Wednesday",
      Day::Thu => "Thursday",
      Day::Fri => "Friday",
      Day::Sat => "Saturday",
    }
  }

  /// Sunday never has classes, whatever the timetable says.
  pub fn is_holiday(self) -> bool {
    self == Day::Sun
  }

  /// Current day at `offset`, see [`local_offset`].
  pub fn today_at(offset: UtcOffset) -> Self {
    OffsetDateTime::now_utc().to_offset(offset).weekday().into()
  }
}

/// Offset of the host's time zone, UTC when it can not be determined.
///
/// The lookup fails once the process has more than one thread, so call it before starting a
/// runtime.
pub fn local_offset() -> UtcOffset {
  match UtcOffset::current_local_offset() {
    Ok(offset) => offset,
    Err(err) => {
      debug!("Unable to determine local offset, using UTC: {}", err);
      UtcOffset::UTC
    }
  }
}

impl From<Weekday> for Day {
  fn from(weekday: Weekday) -> Self {
    match weekday {
      Weekday::Sunday => Day::Sun,
      Weekday::Monday => Day::Mon,
      Weekday::Tuesday => Day::Tue,
      Weekday::Wednesday => Day::Wed,
      Weekday::Thursday => Day::Thu,
      Weekday::Friday => Day::Fri,
      Weekday::Saturday => Day::Sat,
    }
  }
}

impl FromStr for Day {
  type Err = anyhow::Error;

  /// Accepts either the three letter code or the full name, ignoring case.
  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let value = value.trim();

    Day::ALL
      .into_iter()
      .find(|day| {
        day.code().eq_ignore_ascii_case(value) || day.name().eq_ignore_ascii_case(value)
      })
      .ok_or_else(|| anyhow!("Unknown day {:?}", value))
  }
}

impl Display for Day {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}
