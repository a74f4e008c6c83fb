//! Static page handlers

use crate::extractors::Flash;
use crate::views;
use axum::response::Response;

pub async fn index(flash: Flash) -> Response {
    let html = views::pages::index(flash.messages());
    flash.page(html)
}

pub async fn info(flash: Flash) -> Response {
    let html = views::pages::info(flash.messages());
    flash.page(html)
}

pub async fn services(flash: Flash) -> Response {
    let html = views::pages::services(flash.messages());
    flash.page(html)
}
