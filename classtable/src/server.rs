use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use include_dir::{include_dir, Dir};
use time::UtcOffset;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use classtable_core::timetable::section_24a12::SECTION_24A12;
use classtable_core::{Day, Subjects};
use classtable_render::{HtmlView, JsonView, Layout, Page, View};

static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

pub struct AppState {
  subjects: Subjects,
  html: HtmlView,
  clock: Box<dyn Fn() -> Day + Send + Sync>,
}

impl AppState {
  pub fn new(subjects: Subjects, layout: Layout, offset: UtcOffset) -> Self {
    Self {
      subjects,
      html: HtmlView::new(layout),
      clock: Box::new(move || Day::today_at(offset)),
    }
  }
}

pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/api/:day", get(api_day))
    .route("/assets/*path", get(asset))
    .route("/:day", get(day_page))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub async fn serve(bind: SocketAddr, state: AppState) -> anyhow::Result<()> {
  let listener = TcpListener::bind(bind).await?;
  info!("Listening on http://{}", listener.local_addr()?);

  axum::serve(listener, router(Arc::new(state)))
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    error!("Unable to listen for shutdown signal: {}", err);
  }

  info!("Shutting down");
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
  let today = (state.clock)();
  render(&state, &state.html, today, today)
}

async fn day_page(Path(day): Path<String>, State(state): State<Arc<AppState>>) -> Response {
  match Day::from_str(&day) {
    Ok(selected) => render(&state, &state.html, selected, (state.clock)()),
    Err(err) => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
  }
}

async fn api_day(Path(day): Path<String>, State(state): State<Arc<AppState>>) -> Response {
  match Day::from_str(&day) {
    Ok(selected) => render(&state, &JsonView, selected, (state.clock)()),
    Err(err) => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
  }
}

async fn asset(Path(path): Path<String>) -> Response {
  match ASSETS.get_file(&path) {
    Some(file) => ([(CONTENT_TYPE, mime(&path))], file.contents()).into_response(),
    None => StatusCode::NOT_FOUND.into_response(),
  }
}

fn render(state: &AppState, view: &dyn View, selected: Day, today: Day) -> Response {
  let page = Page::new(&SECTION_24A12, &state.subjects, selected, today);

  match view.render(&page) {
    Ok(body) => ([(CONTENT_TYPE, view.content_type())], body).into_response(),
    Err(err) => {
      error!("Unable to render {}: {}", selected, err);
      (StatusCode::INTERNAL_SERVER_ERROR, "Unable to render timetable").into_response()
    }
  }
}

fn mime(path: &str) -> &'static str {
  match path.rsplit_once('.').map(|(_, extension)| extension) {
    Some("css") => "text/css; charset=utf-8",
    Some("js") => "text/javascript; charset=utf-8",
    Some("svg") => "image/svg+xml",
    Some("png") => "image/png",
    _ => "application/octet-stream",
  }
}
