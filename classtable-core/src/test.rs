use std::collections::HashMap;
use std::str::FromStr;

use time::Weekday;

use crate::timetable::section_24a12::SECTION_24A12;
use crate::{
  class_count, complete, day_entries, orphans, parse, subject_key, Day, DaySchedule,
  ParsedDetails, ScheduleEntry, SessionKind, Slot, Subjects, Timetable, TIME_SLOTS,
};

#[test]
fn parse_practical() {
  assert_eq!(
    parse("P-25B17CI471 24A12 (HSL) CL9_1"),
    ParsedDetails {
      subject_code: Some("P-25B17CI471".to_string()),
      batches: Some("24A12".to_string()),
      teacher: Some("HSL".to_string()),
      classroom: Some("CL9_1".to_string()),
      is_lab: true,
    }
  );
}

#[test]
fn parse_lecture_without_batch() {
  assert_eq!(
    parse("L-25B1WHS434 (RTK) LT3"),
    ParsedDetails {
      subject_code: Some("L-25B1WHS434".to_string()),
      batches: None,
      teacher: Some("RTK".to_string()),
      classroom: Some("LT3".to_string()),
      is_lab: false,
    }
  );
}

#[test]
fn parse_batch_list() {
  let details = parse("L-25B1WCI431 24A11,24A12,24A13 (ATA) CR10");

  assert_eq!(details.batches.as_deref(), Some("24A11,24A12,24A13"));
  assert_eq!(details.classroom.as_deref(), Some("CR10"));
}

#[test]
fn parse_empty() {
  let details = parse("");

  assert_eq!(details, ParsedDetails::default());
  assert!(!details.is_lab);
  assert_eq!(details.kind(), None);
}

#[test]
fn parse_is_idempotent() {
  let entry = "L-25B11CI413 24A11,24A12,24A13 (RBT) LT2";
  assert_eq!(parse(entry), parse(entry));
}

#[test]
fn parse_free_text() {
  let details = parse("Guest talk, seminar hall");
  assert_eq!(details, ParsedDetails::default());
}

#[test]
fn parse_bracketed_batch() {
  let details = parse("P-25B1WCI471 B12[24A12] (ATA) CL5_2");

  assert_eq!(details.subject_code.as_deref(), Some("P-25B1WCI471"));
  assert_eq!(details.batches.as_deref(), Some("24A12"));
  assert_eq!(details.teacher.as_deref(), Some("ATA"));
  assert_eq!(details.classroom.as_deref(), Some("CL5_2"));
}

#[test]
fn parse_room_whitespace_and_case() {
  assert_eq!(parse("L-25B11CI411 (ALK) LT 3").classroom.as_deref(), Some("LT3"));
  assert_eq!(parse("L-25B11CI411 (ALK) cr-7").classroom.as_deref(), Some("cr-7"));
}

#[test]
fn parse_lab_signals() {
  assert!(parse("L-25B11CI411 (ALK) LAB4").is_lab);
  assert!(parse("L-25B11CI411 (ALK) lab-4").is_lab);
  assert!(parse("extra LAB session").is_lab);
  assert!(!parse("T-25B11CI412 24A12 (AKJ) TR7").is_lab);
}

#[test]
fn parse_first_match_wins() {
  let details = parse("L-25B11CI411 (ALK) (RBT) CR7 LT2");

  assert_eq!(details.teacher.as_deref(), Some("ALK"));
  assert_eq!(details.classroom.as_deref(), Some("CR7"));
}

#[test]
fn parse_teacher_length() {
  assert_eq!(parse("(A)").teacher, None);
  assert_eq!(parse("(ABCDE)").teacher, None);
  assert_eq!(parse("(ABCD)").teacher.as_deref(), Some("ABCD"));
}

#[test]
fn session_kind() {
  assert_eq!(parse("L-25B11CI411").kind(), Some(SessionKind::Lecture));
  assert_eq!(parse("T-25B11CI412").kind(), Some(SessionKind::Tutorial));
  assert_eq!(parse("P-25B17CI472").kind(), Some(SessionKind::Practical));
  assert_eq!(parse("25B17CI472").kind(), None);
}

#[test]
fn parse_ascii_digits_only() {
  let details = parse("L-٢٥B11CI413 ٢٤A١٢ (RBT) LT٣");

  assert_eq!(details.subject_code, None);
  assert_eq!(details.batches, None);
  assert_eq!(details.classroom, None);
  assert_eq!(details.teacher.as_deref(), Some("RBT"));
  assert!(!details.is_lab);
}

#[test]
fn subject_key_ascii_boundary() {
  assert_eq!(subject_key("L-25B11CI413é"), Some("25B11CI413"));
  assert_eq!(parse("L-25B11CI411 (ALK) LT3é").classroom.as_deref(), Some("LT3"));
}

#[test]
fn session_kind_display() {
  assert_eq!(SessionKind::Lecture.to_string(), "Lecture");
  assert_eq!(SessionKind::Practical.to_string(), "Practical");
}

#[test]
fn subject_key_without_prefix() {
  assert_eq!(subject_key("P-25B17CI471 24A12 (HSL) CL9_1"), Some("25B17CI471"));
  assert_eq!(subject_key("L-25B1WHS434 (RTK) LT3"), Some("25B1WHS434"));
  assert_eq!(subject_key("(RTK) LT3"), None);
}

#[test]
fn complete_fills_breaks() {
  let entries = [
    ScheduleEntry::new("02:00 PM - 02:55 PM", "L-25B1WHS434 (RTK) LT3"),
    ScheduleEntry::new("09:00 AM - 09:55 AM", "P-25B17CI471 24A12 (HSL) CL9_1"),
  ];

  let day = complete(&entries, &TIME_SLOTS);

  assert_eq!(day.len(), 9);
  for (entry, slot) in day.iter().zip(TIME_SLOTS) {
    assert_eq!(entry.time, slot);
  }
  assert_eq!(day[0], entries[1]);
  assert_eq!(day[5], entries[0]);
  assert_eq!(day.iter().filter(|entry| entry.is_break()).count(), 7);
}

#[test]
fn complete_empty_day() {
  let day = complete(&[], &TIME_SLOTS);

  assert_eq!(day.len(), 9);
  assert!(day.iter().all(|entry| entry.entry.is_empty()));
}

#[test]
fn complete_drops_unknown_slot() {
  let entries = [
    ScheduleEntry::new("09:00 AM - 09:55 AM", "L-25B11CI411 (ALK) CR7"),
    ScheduleEntry::new("9:00 AM - 9:55 AM", "L-25B11CI412 (AKJ) CR8"),
  ];

  let day = complete(&entries, &TIME_SLOTS);

  assert_eq!(day.len(), 9);
  assert!(day.iter().all(|entry| entry.entry != entries[1].entry));
  assert_eq!(orphans(&entries, &TIME_SLOTS), vec![&entries[1]]);
}

#[test]
fn complete_first_duplicate_wins() {
  let entries = [
    ScheduleEntry::new("10:00 AM - 10:55 AM", "first"),
    ScheduleEntry::new("10:00 AM - 10:55 AM", "second"),
  ];

  let day = complete(&entries, &TIME_SLOTS);

  assert_eq!(day[1].entry, "first");
  assert!(orphans(&entries, &TIME_SLOTS).is_empty());
}

#[test]
fn sunday_is_holiday() {
  let mut timetable: Timetable = HashMap::new();
  timetable.insert(
    Day::Sun,
    vec![ScheduleEntry::new("09:00 AM - 09:55 AM", "L-25B11CI411 (ALK) CR7")],
  );

  assert!(day_entries(&timetable, Day::Sun).is_empty());
  assert_eq!(class_count(&timetable, Day::Sun), 1);
}

#[test]
fn section_week() {
  for day in Day::ALL {
    let entries = day_entries(&SECTION_24A12, day);

    if day == Day::Sun {
      assert!(entries.is_empty());
    } else {
      assert_eq!(entries.len(), TIME_SLOTS.len());
      assert!(orphans(&SECTION_24A12[&day], &TIME_SLOTS).is_empty());
    }
  }

  assert_eq!(class_count(&SECTION_24A12, Day::Mon), 6);
  assert_eq!(class_count(&SECTION_24A12, Day::Sat), 3);
  assert_eq!(class_count(&SECTION_24A12, Day::Sun), 0);
}

#[test]
fn day_schedule() {
  let subjects = Subjects::builtin();
  let schedule = DaySchedule::build(&SECTION_24A12, &subjects, Day::Sat);

  assert_eq!(schedule.slots.len(), 9);
  assert_eq!(schedule.classes(), 3);
  assert_eq!(schedule.slots[3], Slot::Break { time: TIME_SLOTS[3] });

  match &schedule.slots[2] {
    Slot::Class {
      time,
      entry,
      subject,
      details,
    } => {
      assert_eq!(*time, "11:00 AM - 11:55 AM");
      assert_eq!(*entry, "T-25B11CI412 24A12 (AKJ) TR7");
      assert_eq!(*subject, Some("Design and Analysis of Algorithms"));
      assert_eq!(details.classroom.as_deref(), Some("TR7"));
    }
    slot => panic!("Expected a class, got {:?}", slot),
  }

  assert!(DaySchedule::build(&SECTION_24A12, &subjects, Day::Sun).is_empty());
}

#[test]
fn subjects_lookup() {
  let subjects = Subjects::builtin();

  assert_eq!(subjects.lookup("P-25B17CI471 24A12 (HSL) CL9_1"), Some("Operating Systems Lab"));
  assert_eq!(subjects.lookup("L-99B11XX999 (ABC) LT1"), None);
  assert_eq!(subjects.lookup(""), None);
}

#[test]
fn subjects_from_json() -> anyhow::Result<()> {
  let subjects = Subjects::from_json(r#"{ "25B11CI411": "OS" }"#)?;

  assert_eq!(subjects.len(), 1);
  assert_eq!(subjects.name("25B11CI411"), Some("OS"));
  assert_eq!(subjects.name("25B11CI412"), None);
  assert!(Subjects::from_json("[1, 2]").is_err());

  Ok(())
}

#[test]
fn day_from_str() -> anyhow::Result<()> {
  assert_eq!(Day::from_str("MON")?, Day::Mon);
  assert_eq!(Day::from_str("tue")?, Day::Tue);
  assert_eq!(Day::from_str("Wednesday")?, Day::Wed);
  assert_eq!(Day::from_str(" sunday ")?, Day::Sun);
  assert!(Day::from_str("Funday").is_err());

  Ok(())
}

#[test]
fn day_from_weekday() {
  assert_eq!(Day::from(Weekday::Sunday), Day::Sun);
  assert_eq!(Day::from(Weekday::Friday), Day::Fri);
  assert_eq!(Day::Thu.to_string(), "Thursday");
  assert_eq!(Day::Thu.code(), "THU");
  assert!(Day::Sun.is_holiday());
  assert!(!Day::Sat.is_holiday());
}
