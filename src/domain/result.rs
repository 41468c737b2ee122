//! Result type alias for the configurator

use super::errors::ConfiguratorError;

/// Result type alias for configurator operations
///
/// # Examples
///
/// ```
/// use credhub_configurator::domain::result::Result;
/// use credhub_configurator::domain::errors::ConfiguratorError;
///
/// fn failing_function() -> Result<()> {
///     Err(ConfiguratorError::Decode("port: not an integer".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, ConfiguratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i64> {
            Ok(8844)
        }

        let value = inner()?;
        assert_eq!(value, 8844);
        Ok(())
    }
}
