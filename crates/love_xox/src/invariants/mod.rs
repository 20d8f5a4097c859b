//! First-class board invariants.
//!
//! Invariants are logical properties that hold for every board the session
//! can reach. They are checked after each transition in debug builds and
//! can be tested on their own.

#[cfg(kani)]
mod verification;

pub mod mark_balance;
pub mod monotonic_board;
pub mod single_winner;

pub use mark_balance::MarkBalanceInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use single_winner::SingleWinnerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);

/// Checks a single-state invariant, reporting the violation if any.
pub fn check<S, I: Invariant<S>>(state: &S) -> Result<(), InvariantViolation> {
    if I::holds(state) {
        Ok(())
    } else {
        Err(InvariantViolation::new(I::description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Mark};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let p = Cell::Occupied(Mark::Player);
        let e = Cell::Empty;
        // Three player marks and no opponent marks: unbalanced, single winner.
        let board = Board::from_cells([p, p, p, e, e, e, e, e, e]);
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), MarkBalanceInvariant::description());
    }

    #[test]
    fn test_check_reports_transition_violation() {
        let before = Board::new().with_mark(2, Mark::Opponent);
        let after = Board::new().with_mark(2, Mark::Player);
        let violation = check::<_, MonotonicBoardInvariant>(&(before, after)).unwrap_err();
        assert_eq!(violation.to_string(), MonotonicBoardInvariant::description());
        assert!(check::<_, MonotonicBoardInvariant>(&(before, before)).is_ok());
    }
}
