pub use ascii::AsciiView;
pub use html::{HtmlView, Layout};
pub use json::JsonView;
pub use page::{MenuItem, Page};

mod ascii;
mod html;
mod json;
mod page;

/// A presentation of a [`Page`].
pub trait View {
  fn content_type(&self) -> &'static str;

  fn render(&self, page: &Page<'_>) -> anyhow::Result<String>;
}
