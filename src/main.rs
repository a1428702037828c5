//! Terminal tic-tac-toe runner (default binary).
//!
//! This is the primary gameplay entrypoint: the human plays X, the
//! computer plays O. It owns everything the engine treats as external:
//! terminal input, rendering, the save file, and the delayed scheduling
//! of the computer's turn.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, terminal, QueueableCommand};

use tui_tictactoe::adapter::MoveScheduler;
use tui_tictactoe::core::{GameSnapshot, GameState, SimpleRng};
use tui_tictactoe::engine::choose_move;
use tui_tictactoe::term;
use tui_tictactoe::types::{Difficulty, Mark, COMPUTER_MOVE_DELAY_MS, STARTING_MARK};

/// The automated player's mark. The engine takes it as a parameter; the
/// runner fixes it the way the original does.
const COMPUTER_MARK: Mark = Mark::O;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.queue(terminal::EnterAlternateScreen)?;
    stdout.queue(cursor::Hide)?;
    stdout.flush()?;

    let result = run(&mut stdout);

    // Always try to restore terminal state.
    let mut stdout = io::stdout();
    let _ = stdout.queue(cursor::Show);
    let _ = stdout.queue(terminal::LeaveAlternateScreen);
    let _ = stdout.flush();
    let _ = terminal::disable_raw_mode();
    result
}

fn run(stdout: &mut io::Stdout) -> Result<()> {
    let save_path = save_path();
    let mut game = load_game(&save_path);
    let mut rng = SimpleRng::new(time_seed());
    let mut scheduler = MoveScheduler::new()?;
    let delay = Duration::from_millis(COMPUTER_MOVE_DELAY_MS);

    // A loaded session may already be mid-delay-window; resume it.
    if !game.outcome().is_decided() && game.current_mark() == COMPUTER_MARK {
        scheduler.schedule(game.revision(), delay);
    }

    let mut dirty = true;
    loop {
        if dirty {
            draw(stdout, &game)?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(c @ '1'..='9') => {
                        let idx = c as usize - '1' as usize;
                        if game.current_mark() != COMPUTER_MARK && game.apply_move(idx) {
                            save_game(&save_path, &game);
                            if !game.outcome().is_decided()
                                && game.current_mark() == COMPUTER_MARK
                            {
                                scheduler.schedule(game.revision(), delay);
                            }
                            dirty = true;
                        }
                    }
                    KeyCode::Char('d') => {
                        game.set_difficulty(game.difficulty().toggled());
                        save_game(&save_path, &game);
                        dirty = true;
                    }
                    KeyCode::Char('n') => {
                        scheduler.cancel();
                        game.reset_round();
                        save_game(&save_path, &game);
                        if STARTING_MARK == COMPUTER_MARK {
                            scheduler.schedule(game.revision(), delay);
                        }
                        dirty = true;
                    }
                    KeyCode::Char('z') => {
                        game.reset_score();
                        save_game(&save_path, &game);
                        dirty = true;
                    }
                    _ => {}
                }
            }
        }

        while let Some(turn) = scheduler.try_recv() {
            // Stale wake-up: the board changed since scheduling.
            if turn.revision != game.revision() {
                continue;
            }
            if game.outcome().is_decided() || game.current_mark() != COMPUTER_MARK {
                continue;
            }
            if let Ok(idx) =
                choose_move(game.board(), game.difficulty(), COMPUTER_MARK, &mut rng)
            {
                game.apply_move(idx);
                save_game(&save_path, &game);
                dirty = true;
            }
        }
    }
}

fn draw(stdout: &mut io::Stdout, game: &GameState) -> Result<()> {
    stdout.queue(terminal::Clear(terminal::ClearType::All))?;
    for (y, line) in term::render(game).lines().enumerate() {
        stdout.queue(cursor::MoveTo(0, y as u16))?;
        stdout.queue(crossterm::style::Print(line))?;
    }
    stdout.flush()?;
    Ok(())
}

fn save_path() -> PathBuf {
    std::env::var_os("TICTACTOE_SAVE_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tictactoe-save.json"))
}

/// Load the saved session; missing or corrupt files start fresh.
fn load_game(path: &PathBuf) -> GameState {
    fs::read_to_string(path)
        .ok()
        .and_then(|json| GameSnapshot::from_json(&json).ok())
        .and_then(|snapshot| snapshot.restore().ok())
        .unwrap_or_else(|| GameState::new(Difficulty::Easy))
}

/// Persist the session after every state change; best-effort.
fn save_game(path: &PathBuf, game: &GameState) {
    if let Ok(json) = GameSnapshot::capture(game).to_json() {
        let _ = fs::write(path, json);
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
