use crate::core::{GameChange, GameState};

/// Snapshot handed to the renderer after every accepted state transition.
pub struct GameRenderState {
    pub game: GameState,
    pub last_change: Option<GameChange>,
}
