use std::fmt::Write;

use classtable_core::Slot;

use crate::{Page, View};

const HEADER: [&str; 7] = ["Time", "Type", "Subject", "Code", "Batch", "Faculty", "Room"];

/// Box drawn table for terminals.
pub struct AsciiView;

impl View for AsciiView {
  fn content_type(&self) -> &'static str {
    "text/plain; charset=utf-8"
  }

  fn render(&self, page: &Page<'_>) -> anyhow::Result<String> {
    let mut out = String::new();

    writeln!(out, "{}", page.title)?;
    writeln!(out, "{}", page.subtitle)?;
    writeln!(out)?;

    let menu = page
      .menu
      .iter()
      .map(|item| {
        let marker = if item.selected { ">" } else { " " };
        if item.holiday {
          format!("{}{} (Holiday)", marker, item.day.code())
        } else if item.today {
          format!("{}{} {}*", marker, item.day.code(), item.classes)
        } else {
          format!("{}{} {}", marker, item.day.code(), item.classes)
        }
      })
      .collect::<Vec<String>>();
    writeln!(out, "{}", menu.join("  "))?;
    writeln!(out)?;

    if page.is_holiday() {
      writeln!(out, "{}: It's a Holiday! Enjoy your Sunday!", page.selected())?;
      return Ok(out);
    }

    if page.is_today() {
      writeln!(out, "{} (Today's Classes)", page.selected())?;
    } else {
      writeln!(out, "{}", page.selected())?;
    }

    if page.schedule.is_empty() {
      writeln!(out, "No Classes Today. Enjoy your day off!")?;
      return Ok(out);
    }

    let rows = page
      .schedule
      .slots
      .iter()
      .map(|slot| match slot {
        Slot::Break { time } => vec![
          time.to_string(),
          String::new(),
          "Free Time / Break".to_string(),
          String::new(),
          String::new(),
          String::new(),
          String::new(),
        ],
        Slot::Class {
          time,
          subject,
          details,
          ..
        } => vec![
          time.to_string(),
          details.kind().map(|kind| kind.to_string()).unwrap_or_default(),
          subject.unwrap_or_default().to_string(),
          details.subject_code.clone().unwrap_or_default(),
          details.batches.clone().unwrap_or_default(),
          details.teacher.clone().unwrap_or_default(),
          details.classroom.clone().unwrap_or_default(),
        ],
      })
      .collect::<Vec<Vec<String>>>();

    out.push_str(&table(&HEADER, &rows)?);
    Ok(out)
  }
}

fn table(header: &[&str], rows: &[Vec<String>]) -> anyhow::Result<String> {
  let mut widths = header
    .iter()
    .map(|column| column.chars().count())
    .collect::<Vec<usize>>();

  for row in rows {
    for (width, column) in widths.iter_mut().zip(row) {
      *width = (*width).max(column.chars().count());
    }
  }

  let mut out = String::new();
  line(&mut out, &widths, ('┌', '┬', '┐'))?;
  cells(&mut out, &widths, header.iter().copied())?;
  line(&mut out, &widths, ('├', '┼', '┤'))?;
  for row in rows {
    cells(&mut out, &widths, row.iter().map(String::as_str))?;
  }
  line(&mut out, &widths, ('└', '┴', '┘'))?;

  Ok(out)
}

fn line(
  out: &mut String,
  widths: &[usize],
  (left, joint, right): (char, char, char),
) -> std::fmt::Result {
  let bars = widths
    .iter()
    .map(|width| "─".repeat(width + 2))
    .collect::<Vec<String>>();

  writeln!(out, "{}{}{}", left, bars.join(&joint.to_string()), right)
}

fn cells<'c>(
  out: &mut String,
  widths: &[usize],
  columns: impl Iterator<Item = &'c str>,
) -> std::fmt::Result {
  out.push('│');
  for (width, column) in widths.iter().zip(columns) {
    write!(out, " {:<width$} │", column, width = *width)?;
  }
  out.push('\n');

  Ok(())
}
