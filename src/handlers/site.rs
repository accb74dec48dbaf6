use crate::pages;
use axum::response::Html;
use std::hint::black_box;

pub async fn index() -> Html<String> {
    info!("serving landing page");
    pages::index()
}

pub async fn one_page() -> Html<String> {
    info!("serving one-page landing");
    pages::one_page()
}

pub async fn profile() -> Html<String> {
    info!("serving profile page");
    pages::profile()
}

/// Always panics with a division by zero, so error pages and monitoring can be
/// checked against a real server fault.
pub async fn test_error() -> Html<String> {
    let divisor: u32 = black_box(0);
    let result = 1 / divisor;

    pages::layout("Inicio", "/", &format!("<p>{result}</p>"))
}
