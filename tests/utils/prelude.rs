#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::App;
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use error_pages::error;
pub use http::StatusCode;
pub use sea_orm::{EntityTrait, PaginatorTrait};
pub use serde_json::{json, Value};
