use axum::response::Html;

const DASHBOARD: &str = include_str!("../../../assets/index.html");

/// Single-page dashboard driving the JSON API from the browser.
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD)
}
