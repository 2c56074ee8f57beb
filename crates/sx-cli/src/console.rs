//! Line-oriented commands for an interactive roll session.

use sx_mechanics::{RollParameters, RollSession, SessionUpdate};

use crate::commands::render_update;

const HELP: &str = "\
  roll <n>                 roll a new pool of n dice
  difficulty <n>           re-score the dice at a new difficulty (2-10)
  specialty [on|off]       toggle or set the specialty
  willpower [on|off]       toggle or set willpower
  autos <n>                set automatic successes
  status                   show the current modifiers and result
  help                     show this list
  quit                     leave the session";

/// Wraps a [`RollSession`] and turns text commands into rendered updates.
pub struct Console {
    session: RollSession,
}

impl Console {
    pub fn new(session: RollSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &RollSession {
        &self.session
    }

    pub fn is_quit(input: &str) -> bool {
        input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q")
    }

    /// Process one line of input and return the text to show.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "roll" | "r" => self.do_roll(rest),
            "difficulty" | "diff" | "d" => self.do_difficulty(rest),
            "specialty" | "spec" => {
                let on = parse_toggle(rest, self.session.parameters().specialty)?;
                let update = self.session.set_specialty(on);
                Ok(self.report(update, format!("Specialty {}", on_off(on))))
            }
            "willpower" | "wp" => {
                let on = parse_toggle(rest, self.session.parameters().willpower)?;
                let update = self.session.set_willpower(on);
                Ok(self.report(update, format!("Willpower {}", on_off(on))))
            }
            "autos" | "auto" => {
                let autos = parse_number(rest, "autos <n>")?;
                let update = self.session.set_autos(autos);
                Ok(self.report(update, format!("Autos set to {autos}")))
            }
            "status" => Ok(self.status()),
            "help" | "?" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(format!("unknown command: {cmd} (try 'help')")),
        }
    }

    fn do_roll(&mut self, rest: &str) -> Result<String, String> {
        let pool = parse_number(rest, "roll <n>")?;
        self.session
            .parameters()
            .validate(pool)
            .map_err(|e| e.to_string())?;
        Ok(render_update(&self.session.roll(pool)))
    }

    fn do_difficulty(&mut self, rest: &str) -> Result<String, String> {
        let difficulty = parse_number(rest, "difficulty <n>")?;
        RollParameters {
            difficulty,
            ..*self.session.parameters()
        }
        .validate(0)
        .map_err(|e| e.to_string())?;
        let update = self.session.set_difficulty(difficulty);
        Ok(self.report(update, format!("Difficulty set to {difficulty}")))
    }

    fn report(&self, update: Option<SessionUpdate>, stored: String) -> String {
        match update {
            Some(update) => render_update(&update),
            None => format!("  {stored} (no roll yet)"),
        }
    }

    fn status(&self) -> String {
        let p = self.session.parameters();
        let mut out = format!(
            "  Difficulty {} | Specialty {} | Willpower {} | Autos {}",
            p.difficulty,
            on_off(p.specialty),
            on_off(p.willpower),
            p.autos
        );
        match (self.session.draw(), self.session.outcome()) {
            (Some(draw), Some(outcome)) => {
                out.push_str(&format!("\n  Dice    {draw}\n  Result  {outcome}"));
            }
            _ => out.push_str("\n  No roll yet."),
        }
        out
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn parse_toggle(arg: &str, current: bool) -> Result<bool, String> {
    match arg.to_lowercase().as_str() {
        "" | "toggle" => Ok(!current),
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        other => Err(format!("expected on or off, got '{other}'")),
    }
}

fn parse_number(arg: &str, usage: &str) -> Result<u32, String> {
    if arg.is_empty() {
        return Err(format!("usage: {usage}"));
    }
    arg.parse::<u32>()
        .map_err(|_| format!("not a number: '{arg}' (usage: {usage})"))
}
