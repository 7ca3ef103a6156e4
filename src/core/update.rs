use crate::core::{
    Board, CELL_COUNT, GameChange, GameState, GameStatus, GameUpdate, MoveRejection, Player,
    WIN_LINES,
};

pub fn new_game() -> GameState {
    GameState {
        board: [None; CELL_COUNT],
        current_player: Player::X,
        status: GameStatus::Active,
    }
}

pub fn apply_move(game: &GameState, index: usize) -> GameUpdate {
    if game.status != GameStatus::Active {
        return GameUpdate::Rejected(MoveRejection::GameOver);
    }
    if index >= CELL_COUNT {
        return GameUpdate::Rejected(MoveRejection::OutOfRange);
    }
    if game.board[index].is_some() {
        return GameUpdate::Rejected(MoveRejection::Occupied);
    }

    let mover = game.current_player;
    let mut new_board = game.board;
    new_board[index] = Some(mover);

    let status = if line_completed(&new_board, mover) {
        GameStatus::Won(mover)
    } else if new_board.iter().all(|cell| cell.is_some()) {
        GameStatus::Tie
    } else {
        GameStatus::Active
    };

    // The mover only yields the turn while the game stays active
    let current_player = match status {
        GameStatus::Active => mover.opponent(),
        _ => mover,
    };

    GameUpdate::NextState(
        GameState {
            board: new_board,
            current_player,
            status,
        },
        GameChange {
            index,
            mark: mover,
            status,
        },
    )
}

fn line_completed(board: &Board, mover: Player) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board[i] == Some(mover)))
}
