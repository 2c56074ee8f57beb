use colored::Colorize;

use sx_mechanics::{RollParameters, RollSession, SessionConfig};

pub fn run(
    pool: u32,
    parameters: RollParameters,
    seed: Option<u64>,
    json: bool,
    verbose: bool,
) -> Result<(), String> {
    parameters.validate(pool).map_err(|e| e.to_string())?;

    let mut session = RollSession::new(SessionConfig { seed, parameters });
    let update = session.roll(pool);

    if json {
        let out = serde_json::to_string_pretty(&update).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut modifiers = vec![format!("difficulty {}", parameters.difficulty)];
    if parameters.specialty {
        modifiers.push("specialty".into());
    }
    if parameters.willpower {
        modifiers.push("willpower".into());
    }
    if parameters.autos > 0 {
        modifiers.push(format!("+{} auto", parameters.autos));
    }

    println!(
        "  {} {pool} dice {}",
        "Rolling".bold(),
        format!("({})", modifiers.join(", ")).dimmed()
    );
    println!("  Dice    {}", super::render_dice(&update));
    println!("  Result  {}", super::render_outcome(&update.outcome));

    if verbose {
        println!();
        println!("{}", super::tally_table(&update));
    }

    Ok(())
}
