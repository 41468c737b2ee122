//! Property document decoding
//!
//! The document is read in full before anything is decoded. An input that
//! carries no content is a usage error rather than a decode error, so the
//! caller can print the usage line instead of a parser message.

use super::schema::PropertyDocument;
use crate::domain::errors::ConfiguratorError;
use crate::domain::result::Result;
use std::io::Read;

/// Decodes a property document from JSON text
///
/// # Errors
///
/// - [`ConfiguratorError::Usage`] if the text is empty or only whitespace
/// - [`ConfiguratorError::Decode`] if the JSON is malformed or does not match
///   the schema
///
/// # Examples
///
/// ```
/// use credhub_configurator::properties::parse_properties;
///
/// let properties = parse_properties(r#"{"port": 8844, "bootstrap": true}"#).unwrap();
/// assert!(properties.bootstrap);
/// ```
pub fn parse_properties(input: &str) -> Result<PropertyDocument> {
    if input.trim().is_empty() {
        return Err(ConfiguratorError::Usage);
    }

    let properties: PropertyDocument = serde_json::from_str(input)?;

    tracing::debug!(
        providers = properties.encryption.providers.len(),
        keys = properties.encryption.keys.len(),
        datastore = %properties.data_storage.kind,
        "Decoded property document"
    );

    Ok(properties)
}

/// Reads the whole stream and decodes it with [`parse_properties`]
pub fn read_properties(mut reader: impl Read) -> Result<PropertyDocument> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(|e| {
        ConfiguratorError::Io(format!("Failed to read property document: {e}"))
    })?;
    parse_properties(&input)
}
