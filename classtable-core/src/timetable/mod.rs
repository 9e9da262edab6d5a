use std::collections::HashMap;

use serde::Serialize;

use crate::Day;

pub mod section_24a12;

/// Every day is laid out against these slots, in this order.
pub static TIME_SLOTS: [&str; 9] = [
  "09:00 AM - 09:55 AM",
  "10:00 AM - 10:55 AM",
  "11:00 AM - 11:55 AM",
  "12:00 PM - 12:55 PM",
  "01:00 PM - 01:55 PM",
  "02:00 PM - 02:55 PM",
  "03:00 PM - 03:55 PM",
  "04:00 PM - 04:55 PM",
  "05:00 PM - 05:55 PM",
];

pub type Timetable<'a> = HashMap<Day, Vec<ScheduleEntry<'a>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ScheduleEntry<'a> {
  pub time: &'a str,
  /// Empty when nothing is scheduled.
  pub entry: &'a str,
}

impl<'a> ScheduleEntry<'a> {
  pub const fn new(time: &'a str, entry: &'a str) -> Self {
    Self { time, entry }
  }

  pub const fn free(time: &'a str) -> Self {
    Self { time, entry: "" }
  }

  pub fn is_break(&self) -> bool {
    self.entry.is_empty()
  }
}
