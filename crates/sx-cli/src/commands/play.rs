use std::io::{self, BufRead, Write};

use colored::Colorize;

use sx_mechanics::{RollParameters, RollSession, SessionConfig};

use crate::console::Console;

pub fn run(seed: Option<u64>, difficulty: u32) -> Result<(), String> {
    RollParameters {
        difficulty,
        ..RollParameters::default()
    }
    .validate(0)
    .map_err(|e| e.to_string())?;

    let mut config = SessionConfig::default().with_difficulty(difficulty);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut console = Console::new(RollSession::new(config));

    println!("  {} roll session", "Starting".bold());
    println!(
        "  Difficulty: {} | Type 'help' for commands, 'quit' to exit.\n",
        console.session().parameters().difficulty
    );

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match console.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if Console::is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.yellow());
            }
        }
    }

    Ok(())
}
