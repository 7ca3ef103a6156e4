use crate::core::{CELL_COUNT, GRID_WIDTH, GameState, GameStatus, Player, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const RESTART_WIDTH: u16 = 16;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

/// Screen rectangles recorded during the last draw, so a mouse click can be
/// mapped back to the tile or control under it. Rewritten on every frame.
#[derive(Default)]
pub struct HitAreas {
    tiles: [Rect; CELL_COUNT],
    restart: Rect,
}

impl HitAreas {
    pub fn set_tile(&mut self, index: usize, rect: Rect) {
        self.tiles[index] = rect;
    }

    pub fn set_restart(&mut self, rect: Rect) {
        self.restart = rect;
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<UserAction> {
        let position = Position::new(column, row);
        if self.restart.contains(position) {
            return Some(UserAction::Restart);
        }
        self.tiles
            .iter()
            .position(|tile| tile.contains(position))
            .map(UserAction::PlaceMark)
    }
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
    hit_areas: &mut HitAreas,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(2),                           // title
                Constraint::Length(2),                           // status banner
                Constraint::Length(TILE_HEIGHT * GRID_WIDTH as u16), // board
                Constraint::Length(TILE_HEIGHT),                 // restart control
                Constraint::Length(3),                           // instructions
                Constraint::Min(0),
            ])
            .split(f.area());

        let title = Paragraph::new("Tic-Tac-Toe")
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let status = Paragraph::new(render_status_text(&state.game))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status, chunks[1]);

        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Length(TILE_HEIGHT); GRID_WIDTH])
            .split(chunks[2]);
        for (r, row_area) in rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(LayoutDirection::Horizontal)
                .constraints([Constraint::Length(TILE_WIDTH); GRID_WIDTH])
                .flex(Flex::Center)
                .split(*row_area);
            for (c, tile_area) in columns.iter().enumerate() {
                let index = r * GRID_WIDTH + c;
                hit_areas.set_tile(index, *tile_area);
                let tile = Paragraph::new(tile_text(state.game.mark_at(index)))
                    .block(Block::default().borders(Borders::ALL))
                    .style(Style::default().fg(Color::White))
                    .alignment(Alignment::Center);
                f.render_widget(tile, *tile_area);
            }
        }

        let restart_chunks = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Length(RESTART_WIDTH)])
            .flex(Flex::Center)
            .split(chunks[3]);
        hit_areas.set_restart(restart_chunks[0]);
        let restart = Paragraph::new("Restart Game")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        f.render_widget(restart, restart_chunks[0]);

        let instructions = if state.game.is_over() {
            "Game over: click Restart Game or press R. Q to quit"
        } else {
            "Click a tile or press 1-9 to play, R to restart, Q to quit"
        };
        let instructions = if let Some(change) = &state.last_change {
            format!("{} | Last: {} at tile {}", instructions, change.mark, change.index + 1)
        } else {
            instructions.to_string()
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[4]);
    })?;
    Ok(())
}

pub fn render_status_text(game: &GameState) -> String {
    match game.status {
        GameStatus::Active => format!("{}'s Turn", game.current_player),
        GameStatus::Won(player) => format!("{} Wins!", player),
        GameStatus::Tie => "Tie Game".to_string(),
    }
}

pub fn render_board_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for (i, cell) in game.board.iter().enumerate() {
        let ch = match cell {
            Some(Player::X) => 'X',
            Some(Player::O) => 'O',
            None => '.',
        };
        result.push(ch);
        if (i + 1) % GRID_WIDTH == 0 {
            result.push('\n');
        }
    }
    result
}

fn tile_text(mark: Option<Player>) -> &'static str {
    match mark {
        Some(Player::X) => "X",
        Some(Player::O) => "O",
        None => " ",
    }
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Click { column: u16, row: u16 },
    Quit,
    Resize,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        return Ok(match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    ConsoleInput::UserAction(UserAction::Restart)
                }
                // Tiles read 1-9 in row-major order, 1 is the top-left
                KeyCode::Char(digit @ '1'..='9') => {
                    ConsoleInput::UserAction(UserAction::PlaceMark(digit as usize - '1' as usize))
                }
                _ => ConsoleInput::Unknown,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => ConsoleInput::Click { column, row },
            Event::Resize(_, _) => ConsoleInput::Resize,
            _ => ConsoleInput::Unknown,
        });
    }
    Ok(ConsoleInput::Timeout)
}
