use std::fmt::Display;

use itertools::Itertools;
use thiserror::Error;

/// An error resulting from some validation process.
///
/// Collects every problem found instead of stopping at the first one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Adds a problem.
    pub fn add_problem<S>(&mut self, problem: S)
    where
        S: Into<String>,
    {
        self.problems.push(problem.into())
    }

    /// Converts the collected problems into a result.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.problems.iter().join("; "))
    }
}

impl<S> FromIterator<S> for ValidationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}

impl<S> Extend<S> for ValidationError
where
    S: Into<String>,
{
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.problems.extend(iter.into_iter().map(|s| s.into()))
    }
}

#[cfg(test)]
mod validation_error_test {
    use crate::common::ValidationError;

    #[test]
    fn joins_problems() {
        let error = ValidationError::from_iter(["level must be positive", "name is empty"]);
        assert_eq!(
            error.to_string(),
            "validation failed: level must be positive; name is empty"
        );
        assert_eq!(error.problems().count(), 2);
    }

    #[test]
    fn empty_error_is_ok() {
        assert_eq!(ValidationError::default().into_result(), Ok(()));
        let mut error = ValidationError::default();
        error.add_problem("bad");
        assert!(error.into_result().is_err());
    }
}
