//! Core traits for generic alpha-beta search.

use std::fmt::Debug;
use std::hash::Hash;

/// A score the search can order and bound. Implementations exist for
/// the built-in signed integers. Floating point scores are ruled out
/// on purpose; the search relies on a total order.
pub trait SearchScore: Copy + Ord + Debug {
    const MIN: Self;
    const MAX: Self;
}

macro_rules! impl_search_score {
    ($($t:ty),*) => {
        $(
            impl SearchScore for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_search_score!(i8, i16, i32, i64, i128, isize);

/// Supplies the game specific parts of the search: when a state is
/// final, what a state is worth, and which states follow it.
///
/// One instance backs repeated searches over the lifetime of a game,
/// so implementations are free to cache; the methods take `&mut self`
/// for that reason.
pub trait SearchDelegate<S, C>
where
    S: Clone + Eq + Hash,
    C: SearchScore,
{
    /// True if `state` ends the game. Terminal states are evaluated
    /// but never expanded.
    fn is_terminal(&mut self, state: &S) -> bool;

    /// Scores `state` from the maximizing player's point of view.
    fn evaluate(&mut self, state: &S) -> C;

    /// All states reachable from `state` in one turn. Never called
    /// for terminal states.
    fn successors(&mut self, state: &S) -> Vec<S>;
}

/// Lets a search borrow a delegate that outlives it.
impl<'a, T, S, C> SearchDelegate<S, C> for &'a mut T
where
    T: SearchDelegate<S, C>,
    S: Clone + Eq + Hash,
    C: SearchScore,
{
    fn is_terminal(&mut self, state: &S) -> bool {
        (**self).is_terminal(state)
    }

    fn evaluate(&mut self, state: &S) -> C {
        (**self).evaluate(state)
    }

    fn successors(&mut self, state: &S) -> Vec<S> {
        (**self).successors(state)
    }
}
