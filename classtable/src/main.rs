use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use classtable_core::timetable::section_24a12::SECTION_24A12;
use classtable_core::{local_offset, Day, Subjects};
use classtable_render::{AsciiView, HtmlView, JsonView, Layout, Page, View};

use crate::server::AppState;

mod server;

#[derive(Parser)]
#[command(author, version, about, long_about)]
struct Args {
  /// JSON object of subject code to name, replaces the built-in subject names
  #[arg(long, short, global = true, env = "CLASSTABLE_SUBJECTS")]
  subjects: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the schedule of a single day
  Show {
    /// Day code or name, defaults to today
    #[arg(long, short, env = "CLASSTABLE_DAY")]
    day: Option<Day>,
    #[arg(long, short, env = "CLASSTABLE_FORMAT", value_enum, default_value_t = Format::Ascii)]
    format: Format,
    #[arg(long, short, env = "CLASSTABLE_LAYOUT", value_enum, default_value_t = Design::Badges)]
    layout: Design,
  },
  /// Serve the schedule over http
  Serve {
    #[arg(long, short, env = "CLASSTABLE_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
    #[arg(long, short, env = "CLASSTABLE_LAYOUT", value_enum, default_value_t = Design::Badges)]
    layout: Design,
  },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
  Ascii,
  Html,
  Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Design {
  Badges,
  Cards,
}

impl From<Design> for Layout {
  fn from(design: Design) -> Self {
    match design {
      Design::Badges => Layout::Badges,
      Design::Cards => Layout::Cards,
    }
  }
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();

  // must happen while the process is still single threaded
  let offset = local_offset();
  let subjects = load_subjects(args.subjects.as_deref())?;

  match args.command {
    Command::Show {
      day,
      format,
      layout,
    } => {
      let today = Day::today_at(offset);
      let page = Page::new(&SECTION_24A12, &subjects, day.unwrap_or(today), today);
      print!("{}", view(format, layout).render(&page)?);
    }
    Command::Serve { bind, layout } => {
      let state = AppState::new(subjects, layout.into(), offset);

      tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(server::serve(bind, state))?;
    }
  }

  Ok(())
}

fn load_subjects(path: Option<&Path>) -> anyhow::Result<Subjects> {
  let path = match path {
    None => return Ok(Subjects::builtin()),
    Some(path) => path,
  };

  let json = std::fs::read_to_string(path)
    .with_context(|| format!("Unable to read subject names from {}", path.display()))?;
  let subjects = Subjects::from_json(&json)?;
  info!("Loaded {} subject names from {}", subjects.len(), path.display());

  Ok(subjects)
}

fn view(format: Format, layout: Design) -> Box<dyn View> {
  match format {
    Format::Ascii => Box::new(AsciiView),
    Format::Html => Box::new(HtmlView::new(layout.into())),
    Format::Json => Box::new(JsonView),
  }
}

#[cfg(test)]
mod test {
  use std::path::Path;

  use clap::{CommandFactory, Parser};

  use classtable_core::Day;

  use crate::{load_subjects, Args, Command, Design, Format};

  #[test]
  fn verify_args() {
    Args::command().debug_assert();
  }

  #[test]
  fn show_args() -> anyhow::Result<()> {
    let args = Args::try_parse_from(["classtable", "show", "--day", "friday", "-f", "json"])?;

    match args.command {
      Command::Show {
        day,
        format,
        layout,
      } => {
        assert_eq!(day, Some(Day::Fri));
        assert_eq!(format, Format::Json);
        assert_eq!(layout, Design::Badges);
      }
      Command::Serve { .. } => panic!("Expected show command"),
    }

    Ok(())
  }

  #[test]
  fn rejects_unknown_day() {
    assert!(Args::try_parse_from(["classtable", "show", "--day", "someday"]).is_err());
  }

  #[test]
  fn serve_args() -> anyhow::Result<()> {
    let args = Args::try_parse_from(["classtable", "serve", "-b", "0.0.0.0:3000", "-l", "cards"])?;

    match args.command {
      Command::Serve { bind, layout } => {
        assert_eq!(bind.port(), 3000);
        assert_eq!(layout, Design::Cards);
      }
      Command::Show { .. } => panic!("Expected serve command"),
    }

    Ok(())
  }

  #[test]
  fn missing_subject_file() {
    assert!(load_subjects(Some(Path::new("/nonexistent/subjects.json"))).is_err());
    assert!(load_subjects(None).is_ok_and(|subjects| !subjects.is_empty()));
  }
}
