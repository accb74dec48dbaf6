use super::escape;
use axum::response::Html;

const NAV: [(&str, &str); 6] = [
    ("/", "Inicio"),
    ("/onePage/", "Carreras"),
    ("/MejiaGustavo/", "Perfil"),
    ("/formulario/", "Contacto"),
    ("/reporte/", "Reportar error"),
    ("/errorReports/", "Reportes"),
];

/// Wraps page content in the shared document shell. `current` is the path of the
/// page being rendered, used to highlight its navigation entry.
pub fn layout(title: &str, current: &str, content: &str) -> Html<String> {
    let mut nav = String::new();

    for (href, label) in NAV {
        let class = if href == current {
            "nav-link active"
        } else {
            "nav-link"
        };

        nav.push_str(&format!(
            "<li class=\"nav-item\"><a class=\"{class}\" href=\"{href}\">{label}</a></li>"
        ));
    }

    Html(format!(
        "<!doctype html>\
<html lang=\"es\">\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title}</title>\
<link rel=\"stylesheet\" href=\"/static/css/site.css\">\
</head>\
<body>\
<nav class=\"navbar\"><ul class=\"nav\">{nav}</ul></nav>\
<main class=\"container\">{content}</main>\
<script src=\"/static/js/forms.js\" defer></script>\
</body>\
</html>",
        title = escape(title),
    ))
}
