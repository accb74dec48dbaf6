use crate::{
    error::Result,
    extractors::{last_param, Json, Query},
    pages,
    utils::wants_json,
    StateTrait,
};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use entity::error_reports;
use sea_orm::EntityTrait;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    titulo: String,
    descripcion: String,
    tipo_error: String,
    url: String,
    metodo_http: String,
    ip_cliente: Option<String>,
    fecha_reporte: String,
    activo: bool,
}

impl From<error_reports::Model> for ReportResponse {
    fn from(report: error_reports::Model) -> Self {
        let fecha_reporte = report.fecha_reporte_display();

        Self {
            titulo: report.titulo,
            descripcion: report.descripcion,
            tipo_error: report.tipo_error,
            url: report.url,
            metodo_http: report.metodo_http,
            ip_cliente: report.ip_cliente,
            fecha_reporte,
            activo: report.activo,
        }
    }
}

pub async fn list_reports<S: StateTrait>(
    State(state): State<S>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let reports = error_reports::Entity::find_listed()
        .all(state.db())
        .await?;

    if wants_json(&headers, last_param(&params, "format")) {
        let reports: Vec<ReportResponse> = reports.into_iter().map(Into::into).collect();
        return Ok(Json(reports).into_response());
    }

    Ok(pages::report_table(&reports).into_response())
}
