//! Intent scripts - one command per line
//!
//! ```text
//! select 2 2      # click a hex by axial coordinate
//! click 120 85    # click a pixel, mapped through the hex layout
//! move | attack   # switch phase of the selected unit
//! deselect
//! end             # end turn
//! show            # print the current state
//! ```

use anyhow::{anyhow, bail, Context, Result};

use hexfront_core::{pixel_to_hex, Hex, Intent, Phase};

/// A parsed script line
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Intent(Intent),
    Show,
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, hex_size: f64) -> Result<Option<Command>> {
    let line = match line.split_once('#') {
        Some((code, _comment)) => code,
        None => line,
    };
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "select" | "s" => {
            let [q, r] = two_args(verb, &args)?;
            let q = q.parse::<i32>().with_context(|| format!("Bad q coordinate: {q}"))?;
            let r = r.parse::<i32>().with_context(|| format!("Bad r coordinate: {r}"))?;
            Command::Intent(Intent::Select(Hex::new(q, r)))
        }
        "click" => {
            let [x, y] = two_args(verb, &args)?;
            let x = x.parse::<f64>().with_context(|| format!("Bad x: {x}"))?;
            let y = y.parse::<f64>().with_context(|| format!("Bad y: {y}"))?;
            Command::Intent(Intent::Select(pixel_to_hex(x, y, hex_size)))
        }
        "move" | "m" => no_args(verb, &args, Command::Intent(Intent::SetPhase(Phase::Move)))?,
        "attack" | "a" => no_args(verb, &args, Command::Intent(Intent::SetPhase(Phase::Attack)))?,
        "deselect" | "esc" => no_args(verb, &args, Command::Intent(Intent::Deselect))?,
        "end" | "space" => no_args(verb, &args, Command::Intent(Intent::EndTurn))?,
        "show" => no_args(verb, &args, Command::Show)?,
        other => bail!("Unknown command: {other}"),
    };

    Ok(Some(command))
}

fn two_args<'a>(verb: &str, args: &[&'a str]) -> Result<[&'a str; 2]> {
    match args {
        [a, b] => Ok([*a, *b]),
        _ => Err(anyhow!("{verb} takes two arguments, got {}", args.len())),
    }
}

fn no_args(verb: &str, args: &[&str], command: Command) -> Result<Command> {
    if !args.is_empty() {
        bail!("{verb} takes no arguments");
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select() {
        assert_eq!(
            parse_line("select 2 5", 30.0).unwrap(),
            Some(Command::Intent(Intent::Select(Hex::new(2, 5))))
        );
        assert_eq!(
            parse_line("  S -1 3  # comment", 30.0).unwrap(),
            Some(Command::Intent(Intent::Select(Hex::new(-1, 3))))
        );
    }

    #[test]
    fn test_parse_click_uses_layout() {
        let (x, y) = hexfront_core::hex_to_pixel(Hex::new(3, 2), 30.0);
        assert_eq!(
            parse_line(&format!("click {x} {y}"), 30.0).unwrap(),
            Some(Command::Intent(Intent::Select(Hex::new(3, 2))))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(
            parse_line("attack", 30.0).unwrap(),
            Some(Command::Intent(Intent::SetPhase(Phase::Attack)))
        );
        assert_eq!(
            parse_line("m", 30.0).unwrap(),
            Some(Command::Intent(Intent::SetPhase(Phase::Move)))
        );
        assert_eq!(parse_line("end", 30.0).unwrap(), Some(Command::Intent(Intent::EndTurn)));
        assert_eq!(parse_line("esc", 30.0).unwrap(), Some(Command::Intent(Intent::Deselect)));
        assert_eq!(parse_line("show", 30.0).unwrap(), Some(Command::Show));
    }

    #[test]
    fn test_blank_and_comments() {
        assert_eq!(parse_line("", 30.0).unwrap(), None);
        assert_eq!(parse_line("   # just a note", 30.0).unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("select 1", 30.0).is_err());
        assert!(parse_line("select a b", 30.0).is_err());
        assert!(parse_line("end now", 30.0).is_err());
        assert!(parse_line("fly 1 2", 30.0).is_err());
    }
}
