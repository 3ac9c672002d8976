use std::error::Error;

/// What a driver observed after invoking the code under test.
///
/// A value comparison passes when `expected` and `actual` are equal, which
/// includes both being absent. An absent value never equals a present one.
/// An `Error` always fails.
#[derive(Debug)]
pub enum Outcome<T> {
    Values {
        expected: Option<T>,
        actual: Option<T>,
    },
    Error(Box<dyn Error>),
}

impl<T> Outcome<T> {
    pub fn values(expected: Option<T>, actual: Option<T>) -> Self {
        Outcome::Values { expected, actual }
    }

    /// Both values present.
    pub fn equal(expected: T, actual: T) -> Self {
        Outcome::values(Some(expected), Some(actual))
    }

    pub fn error(error: impl Into<Box<dyn Error>>) -> Self {
        Outcome::Error(error.into())
    }

    /// Forwards the result of a fallible call: `Ok` is compared against
    /// `expected`, `Err` becomes a failed outcome carrying the error.
    pub fn from_result<E>(expected: Option<T>, result: Result<T, E>) -> Self
    where
        E: Into<Box<dyn Error>>,
    {
        match result {
            Ok(actual) => Outcome::values(expected, Some(actual)),
            Err(error) => Outcome::error(error),
        }
    }
}

impl<T: PartialEq> Outcome<T> {
    #[must_use]
    pub fn passed(&self) -> bool {
        match self {
            Outcome::Values { expected, actual } => expected == actual,
            Outcome::Error(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_equals_absent() {
        assert!(Outcome::<i32>::values(None, None).passed());
    }

    #[test]
    fn absent_never_equals_present() {
        assert!(!Outcome::values(None, Some(1)).passed());
        assert!(!Outcome::values(Some(1), None).passed());
    }

    #[test]
    fn present_values_compare_structurally() {
        assert!(Outcome::equal(String::from("abc"), "abc".to_string()).passed());
        assert!(Outcome::equal(vec![1, 2], vec![1, 2]).passed());
        assert!(!Outcome::equal(3, 4).passed());
    }

    #[test]
    fn error_never_passes() {
        assert!(!Outcome::<()>::error("disk on fire").passed());
    }

    #[test]
    fn from_result_forwards_errors() {
        let ok = Outcome::from_result(Some(7), "7".parse::<i32>());
        assert!(ok.passed());

        let err = Outcome::from_result(Some(7), "seven".parse::<i32>());
        match err {
            Outcome::Error(error) => assert_eq!(error.to_string(), "invalid digit found in string"),
            Outcome::Values { .. } => panic!("parse error should become an error outcome"),
        }
    }
}
