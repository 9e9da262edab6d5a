use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::timetable::{ScheduleEntry, Timetable};
use crate::Day::{Fri, Mon, Sat, Thu, Tue, Wed};

pub const TITLE: &str = "Class Schedule";
pub const SECTION: &str = "BTech Semester 4 · 24A12";

pub static SECTION_24A12: Lazy<Timetable<'static>> = Lazy::new(|| {
  HashMap::from([
    (
      Mon,
      vec![
        ScheduleEntry::new("09:00 AM - 09:55 AM", "P-25B17CI471 24A12 (HSL) CL9_1"),
        ScheduleEntry::new("10:00 AM - 10:55 AM", "P-25B17CI471 24A12 (HSL) CL9_1"),
        ScheduleEntry::new("11:00 AM - 11:55 AM", "P-25B17CI473 24A12 (RBT) CL6"),
        ScheduleEntry::new("12:00 PM - 12:55 PM", "P-25B17CI473 24A12 (RBT) CL6"),
        ScheduleEntry::new("02:00 PM - 02:55 PM", "L-25B1WHS434 (RTK) LT3"),
        ScheduleEntry::new(
          "04:00 PM - 04:55 PM",
          "L-25B11CI413 24A11,24A12,24A13 (RBT) LT2",
        ),
      ],
    ),
    (
      Tue,
      vec![
        ScheduleEntry::new(
          "09:00 AM - 09:55 AM",
          "L-25B11CI411 24A11,24A12,24A13 (ALK) CR7",
        ),
        ScheduleEntry::new(
          "10:00 AM - 10:55 AM",
          "L-25B1WCI431 24A11,24A12,24A13 (ATA) CR10",
        ),
        ScheduleEntry::new("11:00 AM - 11:55 AM", "P-25B17CI476 24A12 (MGN) CL9_1"),
        ScheduleEntry::new("12:00 PM - 12:55 PM", "P-25B17CI476 24A12 (MGN) CL9_1"),
        ScheduleEntry::new("02:00 PM - 02:55 PM", "L-25B1WHS434 (RTK) LT2"),
        ScheduleEntry::new("05:00 PM - 05:55 PM", "L-25B1WHS434 (RTK) LT2"),
      ],
    ),
    (
      Wed,
      vec![
        ScheduleEntry::new(
          "09:00 AM - 09:55 AM",
          "L-25B11CI414 24A11,24A12,24A13 (SRJ) CR6",
        ),
        ScheduleEntry::new(
          "10:00 AM - 10:55 AM",
          "L-25B11GE411 24A11,24A12,24A13 (TYN) CR2",
        ),
        ScheduleEntry::new(
          "11:00 AM - 11:55 AM",
          "L-25B11CI412 24A11,24A12,24A13 (AKJ) CR8",
        ),
        ScheduleEntry::new(
          "12:00 PM - 12:55 PM",
          "L-25B11CI413 24A11,24A12,24A13 (RBT) LT2",
        ),
        ScheduleEntry::new("03:00 PM - 03:55 PM", "P-25B1WCI471 B12[24A12] (ATA) CL5_2"),
        ScheduleEntry::new("04:00 PM - 04:55 PM", "P-25B1WCI471 B12[24A12] (ATA) CL5_2"),
        ScheduleEntry::new("05:00 PM - 05:55 PM", "L-25B1WHS434 (RTK) LT2"),
      ],
    ),
    (
      Thu,
      vec![
        ScheduleEntry::new(
          "09:00 AM - 09:55 AM",
          "L-25B11CI414 24A11,24A12,24A13 (SRJ) CR9",
        ),
        ScheduleEntry::new(
          "10:00 AM - 10:55 AM",
          "L-25B11GE411 24A11,24A12,24A13 (TYN) CR8",
        ),
        ScheduleEntry::new(
          "11:00 AM - 11:55 AM",
          "L-25B11CI411 24A11,24A12,24A13 (ALK) CR2",
        ),
        ScheduleEntry::new(
          "12:00 PM - 12:55 PM",
          "L-25B11CI413 24A11,24A12,24A13 (RBT) CR7",
        ),
        ScheduleEntry::new("02:00 PM - 02:55 PM", "L-25B1WHS434 (RTK) LT2"),
        ScheduleEntry::new(
          "03:00 PM - 03:55 PM",
          "L-25B11CI412 24A11,24A12,24A13 (AKJ) CR7",
        ),
      ],
    ),
    (
      Fri,
      vec![
        ScheduleEntry::new(
          "09:00 AM - 09:55 AM",
          "L-25B11CI414 24A11,24A12,24A13 (SRJ) LT3",
        ),
        ScheduleEntry::new(
          "10:00 AM - 10:55 AM",
          "L-25B1WCI431 24A11,24A12,24A13 (ATA) CR10",
        ),
        ScheduleEntry::new("11:00 AM - 11:55 AM", "P-25B17CI472 24A12 (AKJ) CL4"),
        ScheduleEntry::new("12:00 PM - 12:55 PM", "P-25B17CI472 24A12 (AKJ) CL4"),
        ScheduleEntry::new(
          "04:00 PM - 04:55 PM",
          "L-25B11GE411 24A11,24A12,24A13 (TYN) LT3",
        ),
        ScheduleEntry::new("05:00 PM - 05:55 PM", "L-25B1WHS434 (RTK) LT2"),
      ],
    ),
    (
      Sat,
      vec![
        ScheduleEntry::new(
          "09:00 AM - 09:55 AM",
          "L-25B11CI411 24A11,24A12,24A13 (ALK) CR5",
        ),
        ScheduleEntry::new(
          "10:00 AM - 10:55 AM",
          "L-25B11CI412 24A11,24A12,24A13 (AKJ) CR5",
        ),
        ScheduleEntry::new("11:00 AM - 11:55 AM", "T-25B11CI412 24A12 (AKJ) TR7"),
      ],
    ),
  ])
});
