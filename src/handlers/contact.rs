use crate::{
    error::Result,
    extractors::{Form, Json},
    forms::{self, required, required_email, FormReply},
    pages, StateTrait,
};
use axum::{extract::State, http::StatusCode, response::Html};
use entity::contacts;
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Request {
    #[serde(deserialize_with = "crate::utils::deserialize_trimmed")]
    #[validate(
        custom(function = "required"),
        length(max = 70, message = "Asegúrese de que este valor tenga como máximo 70 caracteres.")
    )]
    pub nombre: String,
    #[serde(deserialize_with = "crate::utils::deserialize_trimmed")]
    #[validate(
        custom(function = "required_email"),
        length(max = 254, message = "Asegúrese de que este valor tenga como máximo 254 caracteres.")
    )]
    pub email: String,
    #[serde(deserialize_with = "crate::utils::deserialize_trimmed")]
    #[validate(custom(function = "required"))]
    pub mensaje: String,
}

pub async fn contact_form() -> Html<String> {
    pages::contact_form()
}

pub async fn submit_contact<S: StateTrait>(
    State(state): State<S>,
    Form(request): Form<Request>,
) -> Result<(StatusCode, Json<FormReply>)> {
    if let Err(errors) = request.validate() {
        debug!("rejected contact message: {:?}", forms::field_errors(&errors));

        return Ok((
            StatusCode::BAD_REQUEST,
            Json(FormReply::error("Error al enviar el mensaje")),
        ));
    }

    let contact = contacts::ActiveModel {
        nombre: Set(request.nombre),
        email: Set(request.email),
        mensaje: Set(request.mensaje),
        ..Default::default()
    };

    let result = contacts::Entity::insert(contact).exec(state.db()).await?;

    info!(id = result.last_insert_id, "contact message stored");

    Ok((
        StatusCode::OK,
        Json(FormReply::ok("Mensaje enviado correctamente")),
    ))
}
