use crate::core::{Direction, UserAction, INPUT_POLL_INTERVAL};
use crate::engine::render_game_to_string;
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = render_game_to_string(&state.game);
        let game_paragraph = Paragraph::new(game_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Sokoban - {}", state.game.level_name)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status = format!(
            "Moves: {} | Boxes on goals: {}/{}",
            state.game.move_count,
            state.game.boxes_on_goals(),
            state.game.boxes.len()
        );
        let status = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", status, change_type)
        } else {
            status
        };
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        // Instructions
        let instructions = if state.won {
            "🎉 Level complete! Press R to play again or any other key to quit."
        } else {
            "Controls: WASD or Arrow keys to move, R to restart, Q to quit"
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | {}", instructions, err)
        } else {
            instructions.to_string()
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Restart),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(INPUT_POLL_INTERVAL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
