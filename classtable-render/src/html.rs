use sailfish::TemplateOnce;
use tracing::debug;

use classtable_core::Slot;

use crate::{Page, View};

/// How classes are laid out on the HTML page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
  /// Grid of badges, the subject name is only shown when it is known.
  #[default]
  Badges,
  /// Full cards with a lab marker and an "Unknown Subject" placeholder.
  Cards,
}

pub struct HtmlView {
  layout: Layout,
}

struct Card {
  time: String,
  is_break: bool,
  kind: Option<String>,
  subject: Option<String>,
  code: Option<String>,
  batches: Option<String>,
  teacher: Option<String>,
  classroom: Option<String>,
  is_lab: bool,
  entry: String,
}

#[derive(TemplateOnce)]
#[template(path = "badges.stpl")]
struct BadgesTemplate<'a> {
  page: &'a Page<'a>,
  cards: Vec<Card>,
}

#[derive(TemplateOnce)]
#[template(path = "cards.stpl")]
struct CardsTemplate<'a> {
  page: &'a Page<'a>,
  cards: Vec<Card>,
}

impl HtmlView {
  pub fn new(layout: Layout) -> Self {
    Self { layout }
  }

  fn subject(&self, subject: Option<&str>) -> Option<String> {
    match (self.layout, subject) {
      (_, Some(subject)) => Some(subject.to_string()),
      (Layout::Badges, None) => None,
      (Layout::Cards, None) => Some("Unknown Subject".to_string()),
    }
  }

  fn cards(&self, page: &Page<'_>) -> Vec<Card> {
    page
      .schedule
      .slots
      .iter()
      .map(|slot| match slot {
        Slot::Break { time } => Card {
          time: time.to_string(),
          is_break: true,
          kind: None,
          subject: None,
          code: None,
          batches: None,
          teacher: None,
          classroom: None,
          is_lab: false,
          entry: String::new(),
        },
        Slot::Class {
          time,
          entry,
          subject,
          details,
        } => Card {
          time: time.to_string(),
          is_break: false,
          kind: details.kind().map(|kind| kind.to_string()),
          subject: self.subject(*subject),
          code: details.subject_code.clone(),
          batches: details.batches.clone(),
          teacher: details.teacher.clone(),
          classroom: details.classroom.clone(),
          is_lab: self.layout == Layout::Cards && details.is_lab,
          entry: entry.to_string(),
        },
      })
      .collect()
  }
}

impl View for HtmlView {
  fn content_type(&self) -> &'static str {
    "text/html; charset=utf-8"
  }

  fn render(&self, page: &Page<'_>) -> anyhow::Result<String> {
    debug!("Rendering {} as {:?}", page.selected(), self.layout);
    let cards = self.cards(page);

    let html = match self.layout {
      Layout::Badges => BadgesTemplate { page, cards }.render_once()?,
      Layout::Cards => CardsTemplate { page, cards }.render_once()?,
    };

    Ok(html)
  }
}
