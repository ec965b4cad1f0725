pub mod color;
pub mod error;
pub mod game_type;
pub mod location;

mod display;
mod geometry;

use rustc_hash::FxHashMap;

pub use color::Color;
pub use error::BoardError;
pub use game_type::GameType;
pub use location::BoardLocation;

use geometry::BoardGeometry;

/// Represents the state of a mill board: which playable location holds
/// a piece of which color. The geometry (playable locations, adjacency
/// and mill lines) is fixed per game type and shared by all boards of
/// that type.
#[derive(Clone)]
pub struct Board {
    game_type: GameType,
    geometry: &'static BoardGeometry,
    pieces: FxHashMap<BoardLocation, Color>,
    piece_counts: [usize; 2],
}

impl Board {
    pub fn new(game_type: GameType) -> Self {
        Self {
            game_type,
            geometry: geometry::for_game_type(game_type),
            pieces: FxHashMap::default(),
            piece_counts: [0; 2],
        }
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn size(&self) -> u8 {
        self.game_type.board_size()
    }

    /// All playable locations, in line major order.
    pub fn locations(&self) -> &'static [BoardLocation] {
        &self.geometry.locations
    }

    pub fn is_valid_location(&self, location: BoardLocation) -> bool {
        geometry::is_valid_location(self.game_type, location)
    }

    pub fn piece_at(&self, location: BoardLocation) -> Option<Color> {
        self.pieces.get(&location).copied()
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.piece_counts[color as usize]
    }

    pub fn add_piece(&mut self, location: BoardLocation, color: Color) -> Result<(), BoardError> {
        if !self.is_valid_location(location) {
            return Err(BoardError::InvalidLocation { location });
        }
        if self.pieces.contains_key(&location) {
            return Err(BoardError::LocationOccupied { location });
        }
        self.pieces.insert(location, color);
        self.piece_counts[color as usize] += 1;
        Ok(())
    }

    pub fn remove_piece(&mut self, location: BoardLocation) -> Result<Color, BoardError> {
        if !self.is_valid_location(location) {
            return Err(BoardError::InvalidLocation { location });
        }
        match self.pieces.remove(&location) {
            Some(color) => {
                self.piece_counts[color as usize] -= 1;
                Ok(color)
            }
            None => Err(BoardError::LocationEmpty { location }),
        }
    }

    pub fn move_piece(
        &mut self,
        source: BoardLocation,
        destination: BoardLocation,
    ) -> Result<(), BoardError> {
        if !self.is_valid_location(destination) {
            return Err(BoardError::InvalidLocation {
                location: destination,
            });
        }
        if self.pieces.contains_key(&destination) {
            return Err(BoardError::LocationOccupied {
                location: destination,
            });
        }
        let color = self.remove_piece(source)?;
        self.add_piece(destination, color)
    }

    /// Locations directly connected to `location` by a board line.
    pub fn adjacent_locations(&self, location: BoardLocation) -> &'static [BoardLocation] {
        self.geometry
            .adjacency
            .get(&location)
            .map_or(&[], |neighbors| neighbors.as_slice())
    }

    pub fn is_adjacent(&self, a: BoardLocation, b: BoardLocation) -> bool {
        self.adjacent_locations(a).contains(&b)
    }

    /// Number of complete mills held by `color`.
    pub fn mill_count(&self, color: Color) -> usize {
        self.geometry
            .mills
            .iter()
            .filter(|mill| {
                mill.iter()
                    .all(|&member| self.piece_at(member) == Some(color))
            })
            .count()
    }

    /// True if the piece at `location` completes a line of three pieces
    /// of its color. Empty locations are never part of a mill.
    pub fn is_part_of_mill(&self, location: BoardLocation) -> bool {
        let color = match self.piece_at(location) {
            Some(color) => color,
            None => return false,
        };
        self.geometry
            .mills_at
            .get(&location)
            .map_or(false, |mill_indexes| {
                mill_indexes.iter().any(|&index| {
                    self.geometry.mills[index]
                        .iter()
                        .all(|&member| self.piece_at(member) == Some(color))
                })
            })
    }
}
