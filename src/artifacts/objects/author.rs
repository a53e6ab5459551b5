use crate::errors::{Error, Result};
use derive_new::new;
use regex::Regex;
use std::sync::LazyLock;

const AUTHOR_REGEX: &str = r"^\s*(?P<name>[^<>]*?)\s*<(?P<email>[^<>\s]+)>\s*$";

static AUTHOR_PATTERN: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(AUTHOR_REGEX));

/// Commit author in the `"Display Name <email>"` form git expects for `--author`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Author {
    name: String,
    email: String,
}

impl Author {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Format author name and email for display
    ///
    /// # Returns
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Load author information from environment variables
    ///
    /// Reads GIT_AUTHOR_NAME and GIT_AUTHOR_EMAIL.
    pub fn load_from_env() -> Option<Self> {
        let name = std::env::var("GIT_AUTHOR_NAME").ok()?;
        let email = std::env::var("GIT_AUTHOR_EMAIL").ok()?;

        Some(Author::new(name, email))
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<&str> for Author {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let re = AUTHOR_PATTERN
            .as_ref()
            .map_err(|_| Error::InvalidAuthor(value.to_string()))?;
        let captures = re
            .captures(value)
            .ok_or_else(|| Error::InvalidAuthor(value.to_string()))?;

        let name = captures["name"].to_string();
        if name.is_empty() {
            return Err(Error::InvalidAuthor(value.to_string()));
        }

        Ok(Author::new(name, captures["email"].to_string()))
    }
}

impl std::str::FromStr for Author {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Author::try_from(s)
    }
}
