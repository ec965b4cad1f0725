use crate::board::GameType;

/// Static configuration of one game, fixed before the first action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameOptions {
    pub game_type: GameType,
    /// When a player is down to three pieces on the board, their
    /// pieces may fly to any empty location instead of sliding along
    /// board lines.
    pub jumps_allowed: bool,
    pub white_starts: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            game_type: GameType::NineMensMorris,
            jumps_allowed: true,
            white_starts: true,
        }
    }
}
