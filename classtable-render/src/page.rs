use serde::Serialize;

use classtable_core::timetable::section_24a12::{SECTION, TITLE};
use classtable_core::{class_count, Day, DaySchedule, Subjects, Timetable};

/// Everything a view needs to draw one day.
#[derive(Debug, Serialize)]
pub struct Page<'a> {
  pub title: &'a str,
  pub subtitle: &'a str,
  pub today: Day,
  pub schedule: DaySchedule<'a>,
  pub menu: Vec<MenuItem>,
}

/// One entry of the day selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
  pub day: Day,
  pub name: &'static str,
  pub classes: usize,
  pub holiday: bool,
  pub today: bool,
  pub selected: bool,
}

impl<'a> Page<'a> {
  pub fn new(
    timetable: &Timetable<'a>,
    subjects: &'a Subjects,
    selected: Day,
    today: Day,
  ) -> Self {
    let menu = Day::ALL
      .into_iter()
      .map(|day| MenuItem {
        day,
        name: day.name(),
        classes: class_count(timetable, day),
        holiday: day.is_holiday(),
        today: day == today,
        selected: day == selected,
      })
      .collect();

    Self {
      title: TITLE,
      subtitle: SECTION,
      today,
      schedule: DaySchedule::build(timetable, subjects, selected),
      menu,
    }
  }

  pub fn selected(&self) -> Day {
    self.schedule.day
  }

  pub fn is_holiday(&self) -> bool {
    self.selected().is_holiday()
  }

  /// Holidays are never marked as today.
  pub fn is_today(&self) -> bool {
    self.selected() == self.today && !self.is_holiday()
  }
}
