use crate::core::{GameState, GameStatus, Player};
use std::fmt;

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Active
    }

    pub fn mark_at(&self, index: usize) -> Option<Player> {
        self.board.get(index).copied().flatten()
    }
}
