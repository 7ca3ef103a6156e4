mod consts;
mod model_helpers;
mod models;
mod update;

pub use consts::*;
pub use models::{
    Board, GameChange, GameState, GameStatus, GameUpdate, MoveRejection, Player, UserAction,
};
pub use update::{apply_move, new_game};
