use super::layout;
use axum::response::Html;

pub fn contact_form() -> Html<String> {
    layout(
        "Contacto",
        "/formulario/",
        "<h1>Contacto</h1>\
<form class=\"ajax-form\" method=\"post\" action=\"/formulario/\" novalidate>\
<label for=\"id_nombre\">Nombre</label>\
<input type=\"text\" name=\"nombre\" id=\"id_nombre\" maxlength=\"70\" required>\
<label for=\"id_email\">Email</label>\
<input type=\"email\" name=\"email\" id=\"id_email\" maxlength=\"254\" required>\
<label for=\"id_mensaje\">Mensaje</label>\
<textarea name=\"mensaje\" id=\"id_mensaje\" rows=\"6\" required></textarea>\
<button type=\"submit\">Enviar</button>\
<p class=\"form-status\" role=\"status\"></p>\
</form>",
    )
}

pub fn report_form() -> Html<String> {
    layout(
        "Reportar error",
        "/reporte/",
        "<h1>Reportar un error</h1>\
<form class=\"ajax-form\" method=\"post\" action=\"/reporte/\" novalidate>\
<label for=\"id_titulo\">Título</label>\
<input type=\"text\" name=\"titulo\" id=\"id_titulo\" maxlength=\"150\" required>\
<label for=\"id_descripcion\">Descripción</label>\
<textarea name=\"descripcion\" id=\"id_descripcion\" rows=\"6\" required></textarea>\
<label for=\"id_tipo_error\">Tipo de error</label>\
<input type=\"text\" name=\"tipo_error\" id=\"id_tipo_error\" required>\
<label for=\"id_url\">URL</label>\
<input type=\"url\" name=\"url\" id=\"id_url\" maxlength=\"200\" required>\
<label for=\"id_metodo_http\">Método HTTP</label>\
<select name=\"metodo_http\" id=\"id_metodo_http\" required>\
<option>GET</option><option>POST</option><option>PUT</option>\
<option>PATCH</option><option>DELETE</option>\
</select>\
<label for=\"id_ip_cliente\">IP del cliente</label>\
<input type=\"text\" name=\"ip_cliente\" id=\"id_ip_cliente\" maxlength=\"39\">\
<button type=\"submit\">Guardar reporte</button>\
<p class=\"form-status\" role=\"status\"></p>\
</form>",
    )
}
