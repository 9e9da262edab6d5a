use serde::Serialize;

use crate::complete::complete;
use crate::entry::{parse, ParsedDetails};
use crate::subjects::Subjects;
use crate::timetable::{ScheduleEntry, Timetable, TIME_SLOTS};
use crate::Day;

/// Completed entries for `day`. Holidays have no entries at all.
pub fn day_entries<'a>(timetable: &Timetable<'a>, day: Day) -> Vec<ScheduleEntry<'a>> {
  if day.is_holiday() {
    return Vec::new();
  }

  let entries = timetable.get(&day).map(Vec::as_slice).unwrap_or_default();
  complete(entries, &TIME_SLOTS)
}

/// Number of classes listed for `day`, breaks not included.
pub fn class_count(timetable: &Timetable<'_>, day: Day) -> usize {
  timetable.get(&day).map_or(0, Vec::len)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot<'a> {
  Break {
    time: &'a str,
  },
  Class {
    time: &'a str,
    entry: &'a str,
    subject: Option<&'a str>,
    details: ParsedDetails,
  },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DaySchedule<'a> {
  pub day: Day,
  pub slots: Vec<Slot<'a>>,
}

impl<'a> DaySchedule<'a> {
  pub fn build(timetable: &Timetable<'a>, subjects: &'a Subjects, day: Day) -> Self {
    let slots = day_entries(timetable, day)
      .into_iter()
      .map(|entry| {
        if entry.is_break() {
          Slot::Break { time: entry.time }
        } else {
          Slot::Class {
            time: entry.time,
            entry: entry.entry,
            subject: subjects.lookup(entry.entry),
            details: parse(entry.entry),
          }
        }
      })
      .collect();

    Self { day, slots }
  }

  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  pub fn classes(&self) -> usize {
    self
      .slots
      .iter()
      .filter(|slot| matches!(slot, Slot::Class { .. }))
      .count()
  }
}
