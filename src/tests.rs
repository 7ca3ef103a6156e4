pub use dissimilar::diff as __diff;
use crate::console_interface::render_board_to_string;
use crate::core::*;

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::tests::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::tests::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

struct GameTestState {
    game: GameState,
}

impl GameTestState {
    fn new() -> Self {
        Self { game: new_game() }
    }

    fn game_to_string(&self) -> String {
        render_board_to_string(&self.game).trim_matches('\n').into()
    }

    fn assert_move(&mut self, index: usize) -> GameChange {
        let update = apply_move(&self.game, index);
        let GameUpdate::NextState(new_state, change) = update else {
            panic!(
                "Expected NextState update, got {:?}, on board\n{}",
                update,
                self.game_to_string()
            );
        };

        self.game = new_state;
        change
    }

    fn assert_moves(&mut self, indices: &[usize]) {
        for &index in indices {
            self.assert_move(index);
        }
    }

    fn try_move(&mut self, index: usize) -> GameUpdate {
        let update = apply_move(&self.game, index);
        if let GameUpdate::NextState(new_state, _) = update {
            self.game = new_state;
        }
        update
    }

    fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}

mod test {
    use crate::core::*;
    use crate::tests::GameTestState;

    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }

    #[test]
    fn when_x_completes_top_row_x_wins() {
        let mut game = GameTestState::new();
        game.assert_moves(&[0, 3, 1, 4, 2]);

        game.assert_matches(r#"
XXX
OO.
...
"#);
        assert_eq!(game.game.status, GameStatus::Won(Player::X));
        // The winner keeps the turn; terminal states never toggle the mover
        assert_eq!(game.game.current_player, Player::X);
    }

    #[test]
    fn when_x_completes_column_x_wins() {
        let mut game = GameTestState::new();
        game.assert_moves(&[0, 1, 3, 2, 6]);

        game.assert_matches(r#"
XOO
X..
X..
"#);
        assert_eq!(game.game.status, GameStatus::Won(Player::X));
    }

    #[test]
    fn when_x_completes_diagonal_x_wins() {
        let mut game = GameTestState::new();
        game.assert_moves(&[0, 1, 4, 2, 8]);

        game.assert_matches(r#"
XOO
.X.
..X
"#);
        assert_eq!(game.game.status, GameStatus::Won(Player::X));
    }

    #[test]
    fn when_o_completes_row_o_wins() {
        let mut game = GameTestState::new();
        game.assert_moves(&[0, 3, 1, 4, 8, 5]);

        game.assert_matches(r#"
XX.
OOO
..X
"#);
        assert_eq!(game.game.status, GameStatus::Won(Player::O));
        assert_eq!(game.game.current_player, Player::O);
    }

    #[test]
    fn when_board_fills_without_line_game_is_tied() {
        let mut game = GameTestState::new();
        game.assert_moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        game.assert_matches(r#"
XOX
XOO
OXX
"#);
        assert_eq!(game.game.status, GameStatus::Tie);
    }

    #[test]
    fn when_tile_is_occupied_move_is_rejected() {
        let mut game = GameTestState::new();
        game.assert_move(4);
        let before = game.game;

        assert_eq!(game.try_move(4), GameUpdate::Rejected(MoveRejection::Occupied));
        assert_eq!(game.game, before);
    }

    #[test]
    fn when_game_is_over_moves_are_rejected() {
        let mut game = GameTestState::new();
        game.assert_moves(&[0, 3, 1, 4, 2]);
        let before = game.game;

        assert_eq!(game.try_move(5), GameUpdate::Rejected(MoveRejection::GameOver));
        assert_eq!(game.try_move(0), GameUpdate::Rejected(MoveRejection::GameOver));
        assert_eq!(game.game, before);
        game.assert_matches(r#"
XXX
OO.
...
"#);
    }

    #[test]
    fn when_index_is_out_of_range_move_is_rejected() {
        let mut game = GameTestState::new();
        let before = game.game;

        assert_eq!(game.try_move(9), GameUpdate::Rejected(MoveRejection::OutOfRange));
        assert_eq!(game.try_move(100), GameUpdate::Rejected(MoveRejection::OutOfRange));
        assert_eq!(game.game, before);
    }

    #[test]
    fn accepted_moves_toggle_the_player_exactly_once() {
        let mut game = GameTestState::new();
        assert_eq!(game.game.current_player, Player::X);

        let change = game.assert_move(4);
        assert_eq!(change.mark, Player::X);
        assert_eq!(game.game.current_player, Player::O);

        let change = game.assert_move(0);
        assert_eq!(change.mark, Player::O);
        assert_eq!(game.game.current_player, Player::X);
    }

    #[test]
    fn change_reports_the_index_and_resulting_status() {
        let mut game = GameTestState::new();
        let change = game.assert_move(8);
        assert_eq!(change.index, 8);
        assert_eq!(change.status, GameStatus::Active);

        game.assert_moves(&[3, 4, 5]);
        let change = game.assert_move(0);
        assert_eq!(change.index, 0);
        assert_eq!(change.status, GameStatus::Won(Player::X));
    }

    #[test]
    fn new_game_always_yields_a_fresh_board() {
        let mut game = GameTestState::new();
        game.assert_moves(&[0, 3, 1, 4, 2]);
        assert_eq!(game.game.status, GameStatus::Won(Player::X));

        game.game = new_game();
        assert_eq!(game.game, new_game());
        assert_eq!(game.game.status, GameStatus::Active);
        assert_eq!(game.game.current_player, Player::X);
        assert!(game.game.board.iter().all(|cell| cell.is_none()));
        game.assert_matches(r#"
...
...
...
"#);
    }

    #[test]
    fn apply_move_is_deterministic() {
        let mut game = GameTestState::new();
        game.assert_moves(&[0, 3]);

        let first = apply_move(&game.game, 1);
        let second = apply_move(&game.game, 1);
        assert_eq!(first, second);
    }
}
