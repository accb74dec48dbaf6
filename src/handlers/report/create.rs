use crate::{
    error::Result,
    extractors::{Form, Json},
    forms::{self, optional_ip, required, required_url, FieldErrors, FormReply},
    pages, StateTrait,
};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use entity::error_reports;
use sea_orm::{ActiveModelBehavior, EntityTrait, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Request {
    #[serde(deserialize_with = "crate::utils::deserialize_trimmed")]
    #[validate(
        custom(function = "required"),
        length(max = 150, message = "Asegúrese de que este valor tenga como máximo 150 caracteres.")
    )]
    pub titulo: String,
    #[serde(deserialize_with = "crate::utils::deserialize_trimmed")]
    #[validate(custom(function = "required"))]
    pub descripcion: String,
    #[serde(deserialize_with = "crate::utils::deserialize_trimmed")]
    #[validate(custom(function = "required"))]
    pub tipo_error: String,
    #[serde(deserialize_with = "crate::utils::deserialize_trimmed")]
    #[validate(
        custom(function = "required_url"),
        length(max = 200, message = "Asegúrese de que este valor tenga como máximo 200 caracteres.")
    )]
    pub url: String,
    #[serde(deserialize_with = "crate::utils::deserialize_trimmed")]
    #[validate(
        custom(function = "required"),
        length(max = 10, message = "Asegúrese de que este valor tenga como máximo 10 caracteres.")
    )]
    pub metodo_http: String,
    #[serde(deserialize_with = "crate::utils::deserialize_trimmed")]
    #[validate(
        custom(function = "optional_ip"),
        length(max = 39, message = "Asegúrese de que este valor tenga como máximo 39 caracteres.")
    )]
    pub ip_cliente: String,
}

impl Request {
    /// The url gets a default scheme and the client address its canonical form, so
    /// length limits apply to what is stored.
    fn cleaned(mut self) -> Self {
        self.url = forms::assume_scheme(self.url);
        self.ip_cliente = forms::normalize_ip(self.ip_cliente);
        self
    }
}

pub async fn report_form() -> Html<String> {
    pages::report_form()
}

pub async fn create_report<S: StateTrait>(
    State(state): State<S>,
    Form(request): Form<Request>,
) -> Result<Response> {
    let request = request.cleaned();

    if let Err(errors) = request.validate() {
        let errors = forms::field_errors(&errors);
        debug!("rejected error report: {:?}", errors);

        return Ok(Json(FormReply::<FieldErrors>::error(errors)).into_response());
    }

    let report = error_reports::ActiveModel {
        titulo: Set(request.titulo),
        descripcion: Set(request.descripcion),
        tipo_error: Set(request.tipo_error),
        url: Set(request.url),
        metodo_http: Set(request.metodo_http),
        ip_cliente: Set(forms::non_blank(request.ip_cliente)),
        ..error_reports::ActiveModel::new()
    };

    let result = error_reports::Entity::insert(report)
        .exec(state.db())
        .await?;

    info!(id = result.last_insert_id, "error report stored");

    Ok(Json(FormReply::ok("Reporte guardado correctamente")).into_response())
}
