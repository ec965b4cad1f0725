use thiserror::Error;

use super::location::BoardLocation;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Location {location} is not a playable point on this board")]
    InvalidLocation { location: BoardLocation },
    #[error("Cannot put a piece on an occupied location: {location}")]
    LocationOccupied { location: BoardLocation },
    #[error("Cannot take a piece from an empty location: {location}")]
    LocationEmpty { location: BoardLocation },
}
