mod forms;
mod layout;
mod reports;
mod site;

pub use forms::*;
pub use layout::*;
pub use reports::*;
pub use site::*;

use std::borrow::Cow;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}
