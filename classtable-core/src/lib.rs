pub use complete::{complete, orphans};
pub use day::{local_offset, Day};
pub use entry::{parse, subject_key, ParsedDetails, SessionKind};
pub use schedule::{class_count, day_entries, DaySchedule, Slot};
pub use subjects::Subjects;
pub use timetable::{ScheduleEntry, Timetable, TIME_SLOTS};

mod complete;
mod day;
mod entry;
mod schedule;
mod subjects;
#[cfg(test)]
mod test;
pub mod timetable;
