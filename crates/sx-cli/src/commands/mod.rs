pub mod play;
pub mod roll;

use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};

use sx_mechanics::{DieTint, DieValue, RollOutcome, SessionUpdate};

/// Color one die by its tint.
fn paint_die(value: DieValue, tint: DieTint) -> ColoredString {
    let text = format!("{:>2}", value.get());
    match tint {
        DieTint::Botch => text.red().bold(),
        DieTint::Success => text.green(),
        DieTint::Exceptional => text.bright_green().bold(),
        DieTint::Neutral => text.dimmed(),
    }
}

/// Render the dice of an update, one colored token per die.
pub fn render_dice(update: &SessionUpdate) -> String {
    if update.draw.is_empty() {
        return "(no dice)".dimmed().to_string();
    }
    update
        .draw
        .iter()
        .zip(update.tints())
        .map(|(value, tint)| paint_die(value, tint).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an outcome label.
pub fn render_outcome(outcome: &RollOutcome) -> String {
    let label = outcome.to_string();
    match outcome {
        RollOutcome::Botch { .. } => label.red().bold().to_string(),
        RollOutcome::Failure => label.yellow().to_string(),
        RollOutcome::Success { .. } => label.green().bold().to_string(),
    }
}

/// Render only the parts of the display a change touches.
///
/// New dice and changes that recolor dice print the dice row; every change
/// prints the outcome.
pub fn render_update(update: &SessionUpdate) -> String {
    let mut lines = vec![format!("  {}", format!("[{}]", update.kind).dimmed())];
    if update.kind.recolors_dice() {
        lines.push(format!("  Dice    {}", render_dice(update)));
    }
    lines.push(format!("  Result  {}", render_outcome(&update.outcome)));
    lines.join("\n")
}

/// A summary table of the counts behind an outcome.
pub fn tally_table(update: &SessionUpdate) -> Table {
    let p = &update.parameters;
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Dice", "Difficulty", "Raw", "Ones", "Net"]);
    table.add_row(vec![
        update.draw.len().to_string(),
        p.difficulty.to_string(),
        update.tally.raw_successes.to_string(),
        update.tally.ones.to_string(),
        update.tally.net.to_string(),
    ]);
    table
}
