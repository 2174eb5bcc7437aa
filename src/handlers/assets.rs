use axum::{http::header, response::IntoResponse};

use crate::render::assets::{MAIN_JS, STYLE_CSS};

/// GET /assets/style.css
pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

/// GET /assets/main.js
pub async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        MAIN_JS,
    )
}
