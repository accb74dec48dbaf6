use super::layout;
use axum::response::Html;

pub fn index() -> Html<String> {
    layout(
        "Inicio",
        "/",
        "<section class=\"hero\">\
<h1>Centro de reportes de errores</h1>\
<p>Registra los fallos que encuentres en nuestras aplicaciones web y consulta \
el historial de reportes enviados por el equipo.</p>\
<p><a class=\"button\" href=\"/reporte/\">Reportar un error</a> \
<a class=\"button secondary\" href=\"/errorReports/\">Ver reportes</a></p>\
</section>\
<section>\
<h2>¿Tienes dudas?</h2>\
<p>Escríbenos desde el <a href=\"/formulario/\">formulario de contacto</a> y te \
responderemos lo antes posible.</p>\
</section>",
    )
}

pub fn one_page() -> Html<String> {
    layout(
        "Carreras",
        "/onePage/",
        "<section class=\"hero\">\
<h1>Nuestras carreras</h1>\
<p>Desplázate hacia abajo para descubrir más programas.</p>\
</section>\
<section id=\"carrerasContainer\">\
<div id=\"carreras\" class=\"cards\"></div>\
<p id=\"carrerasLoading\" class=\"muted\" hidden>Cargando…</p>\
</section>\
<script src=\"/static/js/onePage.js\" defer></script>",
    )
}

pub fn profile() -> Html<String> {
    layout(
        "Gustavo Mejía",
        "/MejiaGustavo/",
        "<section class=\"profile\">\
<h1>Gustavo Mejía</h1>\
<p class=\"muted\">Desarrollador web</p>\
<p>Estudiante de ingeniería en sistemas interesado en el desarrollo backend, \
las bases de datos y la observabilidad de aplicaciones.</p>\
<h2>Intereses</h2>\
<ul>\
<li>Desarrollo web</li>\
<li>Bases de datos</li>\
<li>Seguridad informática</li>\
</ul>\
</section>",
    )
}
