//! A stable numbering of board locations, used by the bit encoding in
//! [`game_state`](super::game_state).
//!
//! Locations are numbered by breadth first traversal from the top left
//! corner, following the adjacency lists. The numbering only depends on
//! the board geometry, so every state sharing a game type agrees on
//! which bit belongs to which location.

use std::collections::VecDeque;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::board::{Board, BoardLocation, GameType};

struct LocationIndex {
    ordered: Vec<BoardLocation>,
    index_by_location: FxHashMap<BoardLocation, usize>,
}

impl LocationIndex {
    fn build(game_type: GameType) -> Self {
        let board = Board::new(game_type);
        let start = BoardLocation::new(0, 0);

        let mut ordered = Vec::with_capacity(board.locations().len());
        let mut index_by_location = FxHashMap::default();
        let mut queue = VecDeque::new();

        index_by_location.insert(start, 0);
        ordered.push(start);
        queue.push_back(start);

        while let Some(location) = queue.pop_front() {
            for &neighbor in board.adjacent_locations(location) {
                if !index_by_location.contains_key(&neighbor) {
                    index_by_location.insert(neighbor, ordered.len());
                    ordered.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        // Every morris board is connected, so the traversal reaches
        // every playable location.
        debug_assert_eq!(ordered.len(), board.locations().len());

        Self {
            ordered,
            index_by_location,
        }
    }
}

static INDICES: Lazy<[LocationIndex; 3]> = Lazy::new(|| {
    [
        LocationIndex::build(GameType::ThreeMensMorris),
        LocationIndex::build(GameType::SixMensMorris),
        LocationIndex::build(GameType::NineMensMorris),
    ]
});

fn for_game_type(game_type: GameType) -> &'static LocationIndex {
    match game_type {
        GameType::ThreeMensMorris => &INDICES[0],
        GameType::SixMensMorris => &INDICES[1],
        GameType::NineMensMorris => &INDICES[2],
    }
}

/// All playable locations of `game_type` in index order.
pub fn ordered_locations(game_type: GameType) -> &'static [BoardLocation] {
    &for_game_type(game_type).ordered
}

/// The index assigned to `location`. Panics if the location is not
/// playable on a board of `game_type`.
pub fn index_of(game_type: GameType, location: BoardLocation) -> usize {
    match for_game_type(game_type).index_by_location.get(&location) {
        Some(&index) => index,
        None => panic!("location {} is not playable in {}", location, game_type),
    }
}
