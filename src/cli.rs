//! Command-line argument parsing
//!
//! Parsing takes any iterator of strings so it can be tested without touching
//! the process environment.

use crate::animation::Theme;
use crate::lesson::{FIRST_WEEK, LAST_WEEK};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the tutor
    Run(RunOptions),
    Help,
    Version,
}

/// Flags for the tutor itself. `None` leaves the configured value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub week: Option<u32>,
    pub theme: Option<Theme>,
    pub lessons: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub speed_ms: Option<u64>,
}

impl Args {
    /// Parse arguments from any iterator; the first item is the program name
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        let mut options = RunOptions::default();

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "-h" | "--help" => return Self::with(Command::Help),
                "-V" | "--version" => return Self::with(Command::Version),
                "-w" | "--week" | "-t" | "--theme" | "-l" | "--lessons" | "-c" | "--config"
                | "-s" | "--speed" => {
                    let Some(value) = args.get(i + 1) else {
                        eprintln!("Error: {flag} requires a value");
                        return Self::with(Command::Help);
                    };
                    if let Err(message) = Self::apply_flag(&mut options, flag, value) {
                        eprintln!("Error: {message}");
                        return Self::with(Command::Help);
                    }
                    i += 2;
                }
                unknown => {
                    eprintln!("Unknown argument: {unknown}");
                    return Self::with(Command::Help);
                }
            }
        }

        Self::with(Command::Run(options))
    }

    fn apply_flag(options: &mut RunOptions, flag: &str, value: &str) -> Result<(), String> {
        match flag {
            "-w" | "--week" => {
                let week = value
                    .parse::<u32>()
                    .ok()
                    .filter(|w| (FIRST_WEEK..=LAST_WEEK).contains(w))
                    .ok_or_else(|| {
                        format!("week must be {FIRST_WEEK}-{LAST_WEEK}, got '{value}'")
                    })?;
                options.week = Some(week);
            }
            "-t" | "--theme" => {
                let theme = Theme::from_name(value)
                    .ok_or_else(|| format!("theme must be classic or lotr, got '{value}'"))?;
                options.theme = Some(theme);
            }
            "-l" | "--lessons" => options.lessons = Some(PathBuf::from(value)),
            "-c" | "--config" => options.config = Some(PathBuf::from(value)),
            "-s" | "--speed" => {
                let ms = value
                    .parse::<u64>()
                    .map_err(|_| format!("speed must be milliseconds, got '{value}'"))?;
                options.speed_ms = Some(ms);
            }
            _ => {}
        }
        Ok(())
    }

    fn with(command: Command) -> Self {
        Self { command }
    }
}

pub fn print_help() {
    println!(
        "ctutor {}
A step-by-step C programming tutor

USAGE:
    ctutor [OPTIONS]

OPTIONS:
    -w, --week <N>        Week to open (1-14)
    -t, --theme <NAME>    Lesson theme: classic or lotr
    -l, --lessons <DIR>   Directory holding <theme>/weekNN.json lesson files
    -c, --config <FILE>   Config file (default: ctutor.toml)
    -s, --speed <MS>      Animation step interval in milliseconds (300-3000)
    -h, --help            Print this help
    -V, --version         Print the version

KEYS:
    space  play/pause      right  step       r    reset
    +/-    speed           n/p    next/prev week
    tab    next animation  t      theme      e    export
    l      lesson pane     1-5    lesson tab up/down select item
    h      exercise hint   s      solution   d    save lesson file
    q      quit",
        env!("CARGO_PKG_VERSION")
    );
}

pub fn print_version() {
    println!("ctutor {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_options(args: &[&str]) -> RunOptions {
        match Args::parse_from(args).command {
            Command::Run(options) => options,
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(run_options(&["ctutor"]), RunOptions::default());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(Args::parse_from(["ctutor", "-h"]).command, Command::Help);
        assert_eq!(Args::parse_from(["ctutor", "--help"]).command, Command::Help);
        assert_eq!(Args::parse_from(["ctutor", "-V"]).command, Command::Version);
        assert_eq!(
            Args::parse_from(["ctutor", "--week", "3", "--version"]).command,
            Command::Version
        );
    }

    #[test]
    fn test_all_flags() {
        let options = run_options(&[
            "ctutor",
            "--week",
            "4",
            "-t",
            "lotr",
            "--lessons",
            "content",
            "-c",
            "my.toml",
            "--speed",
            "500",
        ]);

        assert_eq!(options.week, Some(4));
        assert_eq!(options.theme, Some(Theme::Lotr));
        assert_eq!(options.lessons, Some(PathBuf::from("content")));
        assert_eq!(options.config, Some(PathBuf::from("my.toml")));
        assert_eq!(options.speed_ms, Some(500));
    }

    #[test]
    fn test_bad_values_show_help() {
        assert_eq!(Args::parse_from(["ctutor", "--week", "15"]).command, Command::Help);
        assert_eq!(Args::parse_from(["ctutor", "--theme", "noir"]).command, Command::Help);
        assert_eq!(Args::parse_from(["ctutor", "--speed"]).command, Command::Help);
        assert_eq!(Args::parse_from(["ctutor", "extra"]).command, Command::Help);
    }
}
