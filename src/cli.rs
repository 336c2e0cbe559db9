//! Command-line surface: flag parsing and the print/set paths that never
//! open a window.

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use crate::routines::render_text;
use crate::store::StateStore;

/// Display a workout schedule based on the last completed workout.
#[derive(Parser, Debug)]
#[command(name = "workout-display", version, about)]
pub struct Cli {
    /// Set the last completed workout (e.g. 'Chest and triceps')
    #[arg(long = "set-last", value_name = "WORKOUT")]
    pub set_last: Option<String>,

    /// Run the display in fullscreen mode
    #[arg(long)]
    pub fullscreen: bool,

    /// Print today's date and planned workout without launching the UI
    #[arg(long = "print")]
    pub print_only: bool,
}

/// What is left to do once the command line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Display { fullscreen: bool },
}

/// Applies `--set-last`, then either prints to `out`, stops, or asks for the
/// display to be launched.
pub fn run(cli: &Cli, store: &StateStore, out: &mut impl Write) -> Result<Command> {
    if let Some(last_workout) = &cli.set_last {
        store.set_last_workout(last_workout)?;
    }

    if cli.print_only {
        let (day_text, workout_text) = render_text(store)?;
        writeln!(out, "{day_text}")?;
        writeln!(out, "{workout_text}")?;
        return Ok(Command::Exit);
    }

    if cli.set_last.is_some() {
        return Ok(Command::Exit);
    }

    Ok(Command::Display {
        fullscreen: cli.fullscreen,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "workout-display",
            "--set-last",
            "Chest and triceps",
            "--fullscreen",
            "--print",
        ]);
        assert_eq!(cli.set_last.as_deref(), Some("Chest and triceps"));
        assert!(cli.fullscreen);
        assert!(cli.print_only);
    }

    #[test]
    fn no_flags_means_windowed_display() {
        let cli = Cli::parse_from(["workout-display"]);
        assert!(cli.set_last.is_none());
        assert!(!cli.fullscreen);
        assert!(!cli.print_only);
    }

    #[test]
    fn set_last_requires_a_value() {
        assert!(Cli::try_parse_from(["workout-display", "--set-last"]).is_err());
    }
}
