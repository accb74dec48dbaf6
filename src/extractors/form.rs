use super::Json;
use crate::{error, Error};
use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A submitted form: `application/x-www-form-urlencoded`, `multipart/form-data`
/// or a JSON object with the same keys.
pub struct Form<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_json_body(req.headers()) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        if is_multipart(req.headers()) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|_| error::FORM_INVALID)?;
            return multipart_fields(multipart).await.map(Self);
        }

        match axum::Form::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => match rejection {
                FormRejection::InvalidFormContentType(_) => Err(error::FORM_CONTENT_TYPE),
                FormRejection::FailedToDeserializeForm(_)
                | FormRejection::FailedToDeserializeFormBody(_) => Err(error::FORM_INVALID),
                _ => Err(error::INTERNAL),
            },
        }
    }
}

/// Text fields only; uploaded files are skipped. A repeated field keeps its last value.
async fn multipart_fields<T>(mut multipart: Multipart) -> Result<T, Error<'static>>
where
    T: DeserializeOwned,
{
    let mut fields = Map::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| error::FORM_INVALID)?
    {
        if field.file_name().is_some() {
            continue;
        }

        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        let value = field.text().await.map_err(|_| error::FORM_INVALID)?;

        fields.insert(name, Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|_| error::FORM_INVALID)
}

fn content_type(headers: &HeaderMap) -> Option<mime::Mime> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

fn has_json_body(headers: &HeaderMap) -> bool {
    content_type(headers).is_some_and(|mime| {
        mime.type_() == mime::APPLICATION
            && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
    })
}

fn is_multipart(headers: &HeaderMap) -> bool {
    content_type(headers)
        .is_some_and(|mime| mime.type_() == mime::MULTIPART && mime.subtype() == mime::FORM_DATA)
}
