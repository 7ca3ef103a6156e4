use crate::core::CELL_COUNT;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    X,
    O,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameStatus {
    Active,
    Won(Player),
    Tie,
}

/// Row-major 3x3 board; index 0 is the top-left tile.
pub type Board = [Option<Player>; CELL_COUNT];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
}

/// The two mutation commands the view layer can issue.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    PlaceMark(usize),
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameUpdate {
    NextState(GameState, GameChange),
    Rejected(MoveRejection),
}

/// What an accepted move touched, so callers can render incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameChange {
    pub index: usize,
    pub mark: Player,
    pub status: GameStatus,
}

/// Policy rejections, not failures; a rejected move never mutates state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    GameOver,
    Occupied,
    OutOfRange,
}
