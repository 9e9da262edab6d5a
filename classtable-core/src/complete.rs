use tracing::warn;

use crate::timetable::ScheduleEntry;

/// Lays the entries of one day out against `slots`.
///
/// The result has exactly one entry per slot, in slot order. Slots without a class get an empty
/// entry (a break). If a label occurs more than once the first entry wins. Entries whose label is
/// not one of `slots` do not show up in the result, each of them is reported as a warning.
pub fn complete<'a>(entries: &[ScheduleEntry<'a>], slots: &[&'a str]) -> Vec<ScheduleEntry<'a>> {
  for orphan in orphans(entries, slots) {
    warn!(
      "Dropping entry {:?}, time {:?} is not a known slot",
      orphan.entry, orphan.time
    );
  }

  slots
    .iter()
    .map(|slot| {
      entries
        .iter()
        .find(|entry| entry.time == *slot)
        .copied()
        .unwrap_or(ScheduleEntry::free(*slot))
    })
    .collect()
}

/// Entries that [`complete`] has no slot for.
pub fn orphans<'a, 'b>(
  entries: &'b [ScheduleEntry<'a>],
  slots: &[&str],
) -> Vec<&'b ScheduleEntry<'a>> {
  entries
    .iter()
    .filter(|entry| !slots.contains(&entry.time))
    .collect()
}
