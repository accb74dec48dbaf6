mod form;
mod json;
mod query;

pub use form::*;
pub use json::*;
pub use query::*;
