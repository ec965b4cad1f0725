//! A generic alpha-beta searcher for two player, zero sum games.
//!
//! The searcher knows nothing about morris. It walks an abstract game tree
//! supplied by a [`SearchDelegate`] and returns the best successor of the
//! state it was asked about. See [`search`] for the algorithm itself.

pub mod search;
pub mod traits;
pub mod transposition_table;


pub use search::{AlphaBeta, SearchConfig, DEFAULT_SEARCH_TIME, MAX_SEARCH_TIME};
pub use traits::{SearchDelegate, SearchScore};
pub use transposition_table::{BoundType, TableEntry, TranspositionTable};
