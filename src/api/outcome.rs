use std::collections::HashMap;

use axum::{extract::Query, response::Html};

use super::pages;

pub async fn success(Query(params): Query<HashMap<String, String>>) -> Html<String> {
    let action = params.get("action").map(String::as_str).unwrap_or_default();
    Html(pages::success_page(action, params.get("name").map(String::as_str)))
}

pub async fn error(Query(params): Query<HashMap<String, String>>) -> Html<String> {
    let message = params
        .get("err")
        .map(String::as_str)
        .unwrap_or("Unknown error");
    Html(pages::error_page(message))
}
