use axum::http::HeaderMap;

const REQUESTED_WITH: &str = "x-requested-with";
const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Whether the caller asked for a JSON answer instead of a rendered page: an AJAX
/// request (`X-Requested-With: XMLHttpRequest`) or an explicit `format=json`.
pub fn wants_json(headers: &HeaderMap, format: Option<&str>) -> bool {
    let ajax = headers
        .get(REQUESTED_WITH)
        .is_some_and(|value| value.as_bytes() == XML_HTTP_REQUEST.as_bytes());

    ajax || format == Some("json")
}
