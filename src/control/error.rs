//! Error types for the control structures.

/// Represents an attempt to read the value of an `Absent` [`Maybe`](super::Maybe).
///
/// Returned by [`Maybe::try_value`](super::Maybe::try_value). The panicking
/// extractors `value` and `into_value` treat the same situation as a
/// programming error instead.
///
/// # Examples
///
/// ```rust
/// use monadic::control::AbsentValueError;
///
/// assert_eq!(
///     format!("{}", AbsentValueError),
///     "value requested from an Absent Maybe"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsentValueError;

impl std::fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("value requested from an Absent Maybe")
    }
}

impl std::error::Error for AbsentValueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_error_display() {
        assert_eq!(
            AbsentValueError.to_string(),
            "value requested from an Absent Maybe"
        );
    }

    #[test]
    fn test_absent_value_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&AbsentValueError);

        let boxed: Box<dyn std::error::Error> = Box::new(AbsentValueError);
        assert!(boxed.source().is_none());
    }
}
