use serde::{de, Deserializer};
use std::fmt;

struct TrimmedVisitor;

impl<'de> de::Visitor<'de> for TrimmedVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v.trim().to_owned())
    }
}

/// Surrounding whitespace is not part of a submitted value.
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_string(TrimmedVisitor)
}
