//! Board-shape checks shared by engines and tests.
//!
//! An engine names the properties its boards keep after every accepted move
//! and groups them with a tuple type alias. The Connect-4 reducer runs its
//! group after each placement in debug builds.

/// A property of board `S` that every reachable board keeps.
pub trait Invariant<S> {
    /// True if `state` has the property.
    fn holds(state: &S) -> bool;

    /// What the property says, used in violation reports.
    fn description() -> &'static str;
}

/// A failed [`Invariant`], carrying its description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// The failed invariant's description.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked as a group. Every failure is reported, not just the first.
pub trait InvariantSet<S> {
    /// `Ok(())` if every member holds, otherwise each failure in member order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, First, Second> InvariantSet<S> for (First, Second)
where
    First: Invariant<S>,
    Second: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (First::holds(state), First::description()),
            (Second::holds(state), Second::description()),
        ]
        .into_iter()
        .filter(|&(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Joins violations into one message, `; `-separated.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive;
    struct Even;

    impl Invariant<i32> for Positive {
        fn holds(state: &i32) -> bool {
            *state > 0
        }
        fn description() -> &'static str {
            "value is positive"
        }
    }

    impl Invariant<i32> for Even {
        fn holds(state: &i32) -> bool {
            state % 2 == 0
        }
        fn description() -> &'static str {
            "value is even"
        }
    }

    #[test]
    fn test_pair_holds() {
        assert!(<(Positive, Even)>::check_all(&4).is_ok());
    }

    #[test]
    fn test_pair_reports_every_violation_in_order() {
        let violations = <(Positive, Even)>::check_all(&-3).unwrap_err();
        assert_eq!(describe(&violations), "value is positive; value is even");

        let violations = <(Positive, Even)>::check_all(&3).unwrap_err();
        assert_eq!(violations, vec![InvariantViolation::new("value is even")]);
    }
}
