use crate::{Page, View};

pub struct JsonView;

impl View for JsonView {
  fn content_type(&self) -> &'static str {
    "application/json"
  }

  fn render(&self, page: &Page<'_>) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(page)?)
  }
}
