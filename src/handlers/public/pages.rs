// handlers/public/pages.rs - Static front-end pages

use axum::response::Html;

static LOGIN_PAGE: &str = include_str!("../../../static/index.html");
static CONSULTAR_PAGE: &str = include_str!("../../../static/consultar.html");

/// GET / - login form
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// GET /consultar - query page shown after login
pub async fn consultar_page() -> Html<&'static str> {
    Html(CONSULTAR_PAGE)
}
