//! Constraints applied to free-text answers.
//! Template authors refer to them by identifier in the `validator` field of a question.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::LazyLock;
use url::Url;

static CONTAINER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_.-]*$").expect("container name pattern is valid")
});

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    NotEmpty,
    Integer,
    Port,
    Url,
    Name,
    Path,
}

impl Validator {
    /// Checks `value` against the constraint.
    ///
    /// # Returns
    /// * `Err(String)` - A message restating the constraint, suitable for re-prompting
    pub fn validate(&self, value: &str) -> Result<(), String> {
        let valid = match self {
            Validator::NotEmpty => !value.trim().is_empty(),
            Validator::Integer => INTEGER.is_match(value),
            Validator::Port => matches!(value.parse::<u16>(), Ok(port) if port > 0),
            Validator::Url => Url::parse(value).is_ok(),
            Validator::Name => CONTAINER_NAME.is_match(value),
            Validator::Path => !value.is_empty() && !value.contains('\0'),
        };

        if valid {
            Ok(())
        } else {
            Err(self.constraint().to_string())
        }
    }

    fn constraint(&self) -> &'static str {
        match self {
            Validator::NotEmpty => "The value must not be empty",
            Validator::Integer => "The value must be a whole number",
            Validator::Port => "The value must be a port number between 1 and 65535",
            Validator::Url => "The value must be an absolute URL, e.g. https://example.com",
            Validator::Name => {
                "The value must start with a lowercase letter or digit and contain only \
                 lowercase letters, digits, '_', '.' and '-'"
            }
            Validator::Path => "The value must be a valid path",
        }
    }
}

/// Deserializes an optional validator identifier, treating an empty string as absent.
pub fn deserialize_validator<'de, D>(deserializer: D) -> Result<Option<Validator>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(id) => {
            Validator::deserialize(serde::de::value::StrDeserializer::<D::Error>::new(id))
                .map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port() {
        assert!(Validator::Port.validate("8080").is_ok());
        assert!(Validator::Port.validate("65535").is_ok());
        assert!(Validator::Port.validate("0").is_err());
        assert!(Validator::Port.validate("65536").is_err());
        assert!(Validator::Port.validate("http").is_err());
    }

    #[test]
    fn test_name() {
        assert!(Validator::Name.validate("my-shop").is_ok());
        assert!(Validator::Name.validate("db_1.local").is_ok());
        assert!(Validator::Name.validate("My Shop").is_err());
        assert!(Validator::Name.validate("-shop").is_err());
    }

    #[test]
    fn test_url_and_integer() {
        assert!(Validator::Url.validate("https://example.com").is_ok());
        assert!(Validator::Url.validate("example.com").is_err());
        assert!(Validator::Integer.validate("-12").is_ok());
        assert!(Validator::Integer.validate("1.5").is_err());
    }

    #[test]
    fn test_message_restates_constraint() {
        let err = Validator::NotEmpty.validate("   ").unwrap_err();
        assert_eq!(err, "The value must not be empty");
    }
}
