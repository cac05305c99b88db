use super::*;
use crate::kernel::services::ports::Settings;
use crate::models::Catalog;
use axum::http::HeaderValue;
use axum_extra::extract::cookie::Cookie;

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,*/*;q=0.8";

fn state() -> AppState {
    AppState::new(Catalog::builtin(), Settings::default())
}

fn headers(accept: Option<&str>, tabs: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(accept) = accept {
        headers.insert(header::ACCEPT, HeaderValue::from_str(accept).unwrap());
    }
    if let Some(raw) = tabs {
        let cookie = Cookie::new("zview_tabs", raw.to_string());
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&cookie.encoded().to_string()).unwrap(),
        );
    }
    headers
}

fn get(state: &AppState, path: &str, close: Option<&str>, headers: HeaderMap) -> Response {
    let jar = CookieJar::from_headers(&headers);
    respond(state, path, &headers, close, jar)
}

fn query(uri: &str) -> QueryPairs {
    let uri: axum::http::Uri = uri.parse().unwrap();
    Query::try_from_uri(&uri).ok()
}

fn persisted_tabs(response: &Response) -> Option<Vec<String>> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let cookie = Cookie::parse_encoded(raw.to_string()).ok()?;
    assert_eq!(cookie.name(), "zview_tabs");
    serde_json::from_str(cookie.value()).ok()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn unknown_file_is_404_even_with_a_close_request() {
    let state = state();
    for close in [None, Some("index.html")] {
        let response = get(&state, "missing.txt", close, headers(Some(HTML_ACCEPT), None));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(body_text(response).await, "File not found");
    }
}

#[tokio::test]
async fn non_html_clients_get_raw_content() {
    let state = state();
    let response = get(&state, "package.json", None, headers(Some("*/*"), None));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_PLAIN);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let expected = state.catalog.get("package.json").unwrap().content().to_string();
    assert_eq!(body_text(response).await, expected);
}

#[tokio::test]
async fn root_renders_the_home_page_and_persists_tabs() {
    let state = state();
    let response = get(&state, "", None, headers(Some(HTML_ACCEPT), None));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
    assert_eq!(persisted_tabs(&response), Some(vec!["index.html".to_string()]));

    let body = body_text(response).await;
    assert!(body.contains("data-current-file=\"index.html\""));
}

#[tokio::test]
async fn visiting_a_file_appends_it_to_the_tabs() {
    let state = state();
    let response = get(
        &state,
        "script.js",
        None,
        headers(Some(HTML_ACCEPT), Some(r#"["index.html"]"#)),
    );
    assert_eq!(
        persisted_tabs(&response),
        Some(vec!["index.html".to_string(), "script.js".to_string()])
    );
    let body = body_text(response).await;
    assert!(body.contains("href=\"/script.js?close=index.html\""));
}

#[tokio::test]
async fn closing_an_inactive_tab_rerenders_in_place() {
    let state = state();
    let response = get(
        &state,
        "index.html",
        Some("script.js"),
        headers(
            Some(HTML_ACCEPT),
            Some(r#"["index.html","script.js","styles.css"]"#),
        ),
    );
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        persisted_tabs(&response),
        Some(vec!["index.html".to_string(), "styles.css".to_string()])
    );
    let body = body_text(response).await;
    assert!(!body.contains("?close=script.js"));
}

#[tokio::test]
async fn closing_the_active_tab_redirects() {
    let state = state();
    let response = get(
        &state,
        "styles.css",
        Some("styles.css"),
        headers(Some(HTML_ACCEPT), Some(r#"["styles.css"]"#)),
    );
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/index.html");
    assert_eq!(persisted_tabs(&response), Some(Vec::new()));

    let response = get(
        &state,
        "index.html",
        None,
        headers(Some(HTML_ACCEPT), Some("[]")),
    );
    assert_eq!(persisted_tabs(&response), Some(vec!["index.html".to_string()]));
}

#[tokio::test]
async fn corrupt_cookie_falls_back_to_home_tab() {
    let state = state();
    let response = get(
        &state,
        "README.md",
        None,
        headers(Some(HTML_ACCEPT), Some("{not json")),
    );
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        persisted_tabs(&response),
        Some(vec!["index.html".to_string(), "README.md".to_string()])
    );
}

#[test]
fn close_param_takes_the_first_close_and_ignores_the_rest() {
    assert_eq!(close_param(query("/a.js?close=b.js")), Some("b.js".to_string()));
    assert_eq!(
        close_param(query("/a.js?close=b.js&close=c.js")),
        Some("b.js".to_string())
    );
    assert_eq!(
        close_param(query("/a.js?x=1&close=lib%2Fb.js")),
        Some("lib/b.js".to_string())
    );
    assert_eq!(close_param(query("/a.js?other=1")), None);
    assert_eq!(close_param(query("/a.js")), None);
    assert_eq!(close_param(None), None);
}

#[tokio::test]
async fn duplicate_close_on_an_unknown_file_is_still_404() {
    let state = state();
    let close = close_param(query("/nope?close=a&close=b"));
    for accept in [None, Some(HTML_ACCEPT)] {
        let response = get(&state, "nope", close.as_deref(), headers(accept, None));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "File not found");
    }
}

#[tokio::test]
async fn duplicate_close_on_a_known_file_closes_the_first() {
    let state = state();
    let close = close_param(query("/index.html?close=script.js&close=index.html"));
    let response = get(
        &state,
        "index.html",
        close.as_deref(),
        headers(Some(HTML_ACCEPT), Some(r#"["index.html","script.js"]"#)),
    );
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(persisted_tabs(&response), Some(vec!["index.html".to_string()]));
}

#[tokio::test]
async fn leading_separator_is_stripped_only_once() {
    let state = state();
    let response = get(&state, "/index.html", None, headers(Some(HTML_ACCEPT), None));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
