use std::fmt;

use crate::board::{Board, BoardError, BoardLocation, Color};

/// The kind of action the game expects next.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionType {
    Place,
    Move,
    Remove,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionType::Place => "place",
            ActionType::Move => "move",
            ActionType::Remove => "remove",
        };
        write!(f, "{}", name)
    }
}

/// A single action taken by one player. Placing or moving a piece may
/// close a mill, in which case the same player follows up with a
/// remove action against an opponent piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayerAction {
    Place {
        player: Color,
        destination: BoardLocation,
    },
    Move {
        player: Color,
        source: BoardLocation,
        destination: BoardLocation,
    },
    Remove {
        player: Color,
        source: BoardLocation,
    },
}

impl PlayerAction {
    pub fn player(&self) -> Color {
        match *self {
            PlayerAction::Place { player, .. } => player,
            PlayerAction::Move { player, .. } => player,
            PlayerAction::Remove { player, .. } => player,
        }
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            PlayerAction::Place { .. } => ActionType::Place,
            PlayerAction::Move { .. } => ActionType::Move,
            PlayerAction::Remove { .. } => ActionType::Remove,
        }
    }

    /// Applies the action to the board. Validity beyond basic board
    /// consistency is the caller's responsibility.
    pub fn apply_to(&self, board: &mut Board) -> Result<(), BoardError> {
        match *self {
            PlayerAction::Place {
                player,
                destination,
            } => board.add_piece(destination, player),
            PlayerAction::Move {
                source,
                destination,
                ..
            } => board.move_piece(source, destination),
            PlayerAction::Remove { source, .. } => board.remove_piece(source).map(|_| ()),
        }
    }

    /// Reverts the action. A removed piece always belonged to the
    /// opponent of the acting player, so undoing a removal puts an
    /// opponent piece back.
    pub fn undo_on(&self, board: &mut Board) -> Result<(), BoardError> {
        match *self {
            PlayerAction::Place { destination, .. } => board.remove_piece(destination).map(|_| ()),
            PlayerAction::Move {
                source,
                destination,
                ..
            } => board.move_piece(destination, source),
            PlayerAction::Remove { player, source } => board.add_piece(source, player.opposite()),
        }
    }

    /// The location to check for a freshly closed mill after the
    /// action has been applied.
    pub fn mill_location(&self) -> Option<BoardLocation> {
        match *self {
            PlayerAction::Place { destination, .. } | PlayerAction::Move { destination, .. } => {
                Some(destination)
            }
            PlayerAction::Remove { .. } => None,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Place {
                player,
                destination,
            } => write!(f, "{} places at {}", player, destination),
            PlayerAction::Move {
                player,
                source,
                destination,
            } => write!(f, "{} moves {} to {}", player, source, destination),
            PlayerAction::Remove { player, source } => {
                write!(f, "{} removes {}", player, source)
            }
        }
    }
}
