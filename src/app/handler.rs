use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::CookieJar;
use compact_str::CompactString;

use super::state::AppState;
use crate::kernel::services::adapters::CookieTabStore;
use crate::kernel::{Effect, Negotiated, Resolver, TabSession};
use crate::models::FileRecord;
use crate::views::{render_page, PageContext};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const NO_CACHE: &str = "no-cache";
const NOT_FOUND_BODY: &str = "File not found";

/// Query pairs in request order. Extraction never rejects: an unparsable query reads as empty.
pub type QueryPairs = Option<Query<Vec<(String, String)>>>;

/// The tab to close before rendering; the first `close` wins.
pub fn close_param(query: QueryPairs) -> Option<String> {
    let Query(pairs) = query?;
    pairs
        .into_iter()
        .find(|(key, _)| key == "close")
        .map(|(_, value)| value)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_home))
        .route("/*path", get(serve_file))
        .with_state(state)
}

async fn serve_home(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: QueryPairs,
    jar: CookieJar,
) -> Response {
    respond(&state, "", &headers, close_param(query).as_deref(), jar)
}

async fn serve_file(
    State(state): State<Arc<AppState>>,
    path: Option<Path<String>>,
    headers: HeaderMap,
    query: QueryPairs,
    jar: CookieJar,
) -> Response {
    // 无法解码的路径（非 UTF-8）不可能是目录中的文件名
    let Some(Path(path)) = path else {
        tracing::info!(status = 404, "undecodable path");
        return not_found();
    };
    respond(&state, &path, &headers, close_param(query).as_deref(), jar)
}

/// Resolve first, then negotiate; tabs are only touched for page loads.
///
/// `path` is the request path without its leading `/`.
pub fn respond(
    state: &AppState,
    path: &str,
    headers: &HeaderMap,
    close: Option<&str>,
    jar: CookieJar,
) -> Response {
    let span = tracing::info_span!("request", path = %path);
    let _enter = span.enter();

    let resolver = Resolver::new(&state.catalog, &state.settings.home_file);
    let record = match resolver.resolve(path) {
        Ok(record) => record,
        Err(err) => {
            tracing::info!(status = 404, "{}", err);
            return not_found();
        }
    };

    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());
    let mode = Negotiated::from_accept(accept);

    match mode {
        Negotiated::Raw => {
            tracing::info!(file = record.name(), status = 200, mode = mode.as_str(), "served");
            raw_response(record)
        }
        Negotiated::Html => page_response(state, record, close, jar),
    }
}

fn page_response(
    state: &AppState,
    record: &FileRecord,
    close: Option<&str>,
    jar: CookieJar,
) -> Response {
    let store = CookieTabStore::new(jar, state.settings.tab_cookie.as_str());
    let mut session = TabSession::load(&state.catalog, &state.settings.home_file, store);
    session.reconcile(record.name());

    let mut target: Option<CompactString> = None;
    if let Some(name) = close {
        let (_, effects) = session.close(name);
        for effect in effects {
            if let Effect::Navigate(name) = effect {
                target = Some(name);
            }
        }
    }

    if let Some(target) = target {
        tracing::info!(file = record.name(), status = 303, to = %target, "tab closed");
        let jar = session.into_store().into_jar();
        return (jar, Redirect::to(&format!("/{}", target))).into_response();
    }

    let tabs = session.tab_strip();
    let body = render_page(&PageContext {
        catalog: &state.catalog,
        record,
        tabs: &tabs,
        viewer: &state.settings.viewer,
    });
    tracing::info!(
        file = record.name(),
        status = 200,
        mode = Negotiated::Html.as_str(),
        tabs = tabs.len(),
        "served"
    );

    let jar = session.into_store().into_jar();
    (jar, [(header::CACHE_CONTROL, NO_CACHE)], Html(body)).into_response()
}

fn raw_response(record: &FileRecord) -> Response {
    (
        [
            (header::CONTENT_TYPE, TEXT_PLAIN),
            (header::CACHE_CONTROL, NO_CACHE),
        ],
        record.content().to_string(),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        NOT_FOUND_BODY,
    )
        .into_response()
}

#[cfg(test)]
#[path = "../../tests/unit/app/handler.rs"]
mod tests;
