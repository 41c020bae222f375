//! Simple interactive CLI mode
//!
//! Text-based tower game without the TUI

use crate::engine::TowerEngine;
use crate::hints::HintKind;
use crate::output::display::print_game_summary;
use crate::output::formatters::tower_line;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// One parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    Undo,
    Reset,
    New,
    End,
    Hint(String),
    Word(String),
    Unknown(String),
    Empty,
}

/// Commands start with ':' so that words like "undo" or "reset" can be played
fn parse_input(line: &str) -> Input {
    let line = line.trim().to_lowercase();
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return Input::Empty;
    };
    let Some(command) = first.strip_prefix(':') else {
        return Input::Word(first.to_string());
    };
    match command {
        "quit" | "q" => Input::Quit,
        "undo" | "u" => Input::Undo,
        "reset" | "r" => Input::Reset,
        "new" | "n" => Input::New,
        "end" | "e" => Input::End,
        "hint" | "h" => Input::Hint(parts.next().unwrap_or("smart").to_string()),
        _ => Input::Unknown(first.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or if the engine
/// loses the session.
pub fn run_simple(engine: &TowerEngine, starting_word: Option<&str>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Tower - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Each new word must use every letter of the word below plus one more.");
    println!(
        "Hint styles: {}",
        HintKind::all().map(|k| k.name()).join(", ")
    );
    println!("Commands: ':hint [style]', ':undo', ':reset', ':end', ':new', ':quit'\n");

    let mut id = engine.create_session(starting_word)?;

    loop {
        let state = engine.get_state(&id)?;
        println!("{}", "─".repeat(60).cyan());
        println!("Tower ({}): {}", state.height, tower_line(&state.tower));

        if !state.is_active {
            println!("Game over. Type ':reset' to replay this tower, ':new' for another or ':quit'.");
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match parse_input(&line?) {
            Input::Empty => {}
            Input::Unknown(command) => report(false, &format!("Unknown command '{command}'")),
            Input::Quit => break,
            Input::Undo => {
                let response = engine.undo(&id)?;
                report(response.success, &response.message);
            }
            Input::Reset => {
                engine.reset(&id)?;
                report(true, "Tower reset");
            }
            Input::New => {
                engine.close_session(&id);
                id = engine.create_session(None)?;
                report(true, "New game started");
            }
            Input::End => match engine.end(&id) {
                Ok(summary) => print_game_summary(&summary),
                Err(err) => report(false, &err.to_string()),
            },
            Input::Hint(style) => {
                let response = engine.hint(&id, &style)?;
                let text = response
                    .hint_text
                    .or(response.message)
                    .unwrap_or_default();
                if response.no_moves_available {
                    println!("{}", text.bright_yellow().bold());
                } else {
                    report(response.success, &text);
                    if let Some(count) = response.candidate_count {
                        println!("   ({count} possible words)");
                    }
                }
            }
            Input::Word(word) => {
                let response = engine.add_word(&id, &word)?;
                report(response.success, &response.message);
                if response.success && engine.next_word_count(&id)? == 0 {
                    println!(
                        "{}",
                        format!(
                            "You've reached the top! No more words can be built from '{}'.",
                            word.to_uppercase()
                        )
                        .bright_yellow()
                        .bold()
                    );
                    println!("Type ':end' to see your score.");
                }
            }
        }
    }

    if let Ok(state) = engine.get_state(&id)
        && state.is_active
        && state.height > 1
        && let Ok(summary) = engine.end(&id)
    {
        print_game_summary(&summary);
    }
    engine.close_session(&id);
    println!("\nThanks for playing!\n");
    Ok(())
}

fn report(success: bool, message: &str) {
    if success {
        println!("{} {message}", "✓".green().bold());
    } else {
        println!("{} {message}", "✗".red().bold());
    }
}
