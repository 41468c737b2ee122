//! Identifier types
//!
//! Provider names are the join key between the independently listed
//! encryption providers and keys, so they get their own type.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of an encryption provider
///
/// Keys refer to their provider through this name. An empty name is allowed
/// at decode time; it simply never matches a named provider.
///
/// # Examples
///
/// ```
/// use credhub_configurator::domain::ids::ProviderName;
///
/// let name = ProviderName::from("some-hsm-provider");
/// assert_eq!(name.as_str(), "some-hsm-provider");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderName(String);

impl ProviderName {
    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProviderName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for ProviderName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
