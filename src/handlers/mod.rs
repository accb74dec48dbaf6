mod contact;
mod report;
mod site;

use crate::state::StateTrait;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sea_orm::ConnectionTrait;
use tower_http::services::ServeDir;

const ONE_PAGE: &str = "/onePage/";
const PROFILE: &str = "/MejiaGustavo/";
const TEST_ERROR: &str = "/test-500/";
const CONTACT: &str = "/formulario/";
const REPORT: &str = "/reporte/";
const REPORT_LIST: &str = "/errorReports/";

const SLASHED_ROUTES: [&str; 6] = [ONE_PAGE, PROFILE, TEST_ERROR, CONTACT, REPORT, REPORT_LIST];

pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .route("/", get(site::index))
        .route(ONE_PAGE, get(site::one_page))
        .route(PROFILE, get(site::profile))
        .route(TEST_ERROR, get(site::test_error))
        .route(
            CONTACT,
            get(contact::contact_form).post(contact::submit_contact::<S>),
        )
        .route(
            REPORT,
            get(report::report_form).post(report::create_report::<S>),
        )
        .route(REPORT_LIST, get(report::list_reports::<S>))
        .nest_service("/static", ServeDir::new(state.static_dir()))
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
        .fallback(append_slash)
}

/// `/formulario` is redirected to `/formulario/`; other unknown paths are not found.
async fn append_slash(uri: Uri) -> Response {
    match slashed_location(&uri) {
        Some(location) => {
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn slashed_location(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.ends_with('/') {
        return None;
    }

    let slashed = format!("{path}/");
    if !SLASHED_ROUTES.contains(&slashed.as_str()) {
        return None;
    }

    Some(match uri.query() {
        Some(query) => format!("{slashed}?{query}"),
        None => slashed,
    })
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if let Err(error) = state.db().execute_unprepared("select 1").await {
        warn!("liveness probe failed: {:?}", error);
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
