use super::{escape, layout};
use axum::response::Html;
use entity::error_reports;

pub fn report_table(reports: &[error_reports::Model]) -> Html<String> {
    let mut rows = String::new();

    for report in reports {
        rows.push_str(&format!(
            "<tr>\
<td>{titulo}</td>\
<td>{descripcion}</td>\
<td>{tipo_error}</td>\
<td><a href=\"{url}\">{url}</a></td>\
<td>{metodo_http}</td>\
<td>{ip_cliente}</td>\
<td>{fecha_reporte}</td>\
<td>{activo}</td>\
</tr>",
            titulo = escape(&report.titulo),
            descripcion = escape(&report.descripcion),
            tipo_error = escape(&report.tipo_error),
            url = escape(&report.url),
            metodo_http = escape(&report.metodo_http),
            ip_cliente = escape(report.ip_cliente.as_deref().unwrap_or("-")),
            fecha_reporte = report.fecha_reporte_display(),
            activo = if report.activo { "Sí" } else { "No" },
        ));
    }

    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"8\">No hay reportes registrados.</td></tr>");
    }

    layout(
        "Reportes de errores",
        "/errorReports/",
        &format!(
            "<h1>Reportes de errores</h1>\
<p><button type=\"button\" id=\"refreshReports\">Actualizar</button></p>\
<table class=\"reports\">\
<thead><tr>\
<th>Título</th><th>Descripción</th><th>Tipo</th><th>URL</th>\
<th>Método</th><th>IP</th><th>Fecha</th><th>Activo</th>\
</tr></thead>\
<tbody id=\"reportRows\">{rows}</tbody>\
</table>"
        ),
    )
}
