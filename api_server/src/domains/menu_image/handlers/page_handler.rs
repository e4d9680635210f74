use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../../templates/index.html");

// 메인 페이지 핸들러
// Handler: static landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
