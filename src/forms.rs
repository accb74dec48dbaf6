use serde::Serialize;
use std::{borrow::Cow, collections::BTreeMap, net::IpAddr};
use validator::{ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

pub const REQUIRED: &str = "Este campo es obligatorio.";
pub const INVALID_EMAIL: &str = "Introduzca una dirección de correo electrónico válida.";
pub const INVALID_URL: &str = "Introduzca una URL válida.";
pub const INVALID_IP: &str = "Introduzca una dirección IPv4 o IPv6 válida.";

const URL_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];
const DEFAULT_SCHEME: &str = "https";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Body answered to every form submission.
#[derive(Debug, Serialize)]
pub struct FormReply<M = &'static str> {
    pub status: Status,
    pub message: M,
}

impl<M> FormReply<M> {
    pub fn ok(message: M) -> Self {
        Self {
            status: Status::Ok,
            message,
        }
    }

    pub fn error(message: M) -> Self {
        Self {
            status: Status::Error,
            message,
        }
    }
}

pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flattens validation errors into `field -> [message, ...]`.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => error.code.to_string(),
                })
                .collect();

            (field.to_string(), messages)
        })
        .collect()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", REQUIRED));
    }

    Ok(())
}

pub fn required_email(value: &str) -> Result<(), ValidationError> {
    required(value)?;

    if !value.validate_email() {
        return Err(invalid("email", INVALID_EMAIL));
    }

    Ok(())
}

/// Only absolute web or ftp addresses with a host are accepted.
pub fn required_url(value: &str) -> Result<(), ValidationError> {
    required(value)?;

    let valid = value.split_once("://").is_some_and(|(scheme, rest)| {
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();

        !host.is_empty()
            && URL_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
    });

    if !valid || !value.validate_url() {
        return Err(invalid("url", INVALID_URL));
    }

    Ok(())
}

/// Blank is accepted, anything else has to be an IPv4 or IPv6 address.
pub fn optional_ip(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.parse::<IpAddr>().is_err() {
        return Err(invalid("ip", INVALID_IP));
    }

    Ok(())
}

/// `example.com/a` is read as `https://example.com/a`. Values that already name a
/// scheme are left for [`required_url`] to judge.
pub fn assume_scheme(value: String) -> String {
    if value.is_empty() || has_scheme(&value) {
        return value;
    }

    match value.strip_prefix("//") {
        Some(rest) => format!("{DEFAULT_SCHEME}://{rest}"),
        None => format!("{DEFAULT_SCHEME}://{value}"),
    }
}

fn has_scheme(value: &str) -> bool {
    value.split_once(':').is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Canonical text of an address, IPv6 lowercased and compressed. Unparsable input is
/// returned as is so validation reports it.
pub fn normalize_ip(value: String) -> String {
    match value.parse::<IpAddr>() {
        Ok(ip) => ip.to_string(),
        Err(_) => value,
    }
}

/// Blank optional values are stored as NULL.
pub fn non_blank(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
