//! Winelist CLI - Convert the wine review CSV export to the JSON wine list
//!
//! ```bash
//! winelist input.csv output.json
//! ```
//!
//! Exactly two arguments, both taken as paths. Anything else prints the
//! usage line and exits 1.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use winelist::logs;
use winelist::{transform, ConvertOptions};

const USAGE: &str = "Usage: winelist <input.csv> <output.json>";

#[derive(Parser)]
#[command(name = "winelist", version)]
#[command(about = "Convert a wine review CSV export to the JSON wine list", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Input CSV file
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Output JSON file (replaced if it exists)
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

/// Parse the command line, `None` unless there are exactly two arguments.
///
/// Arguments go after a `--` so clap takes every one of them as a path,
/// including `--`, `--help` or `-x.csv`.
fn parse_args(args: Vec<OsString>) -> Option<Cli> {
    let mut args = args.into_iter();
    let bin = args.next()?;
    let rest: Vec<OsString> = args.collect();
    if rest.len() != 2 {
        return None;
    }

    let argv = std::iter::once(bin)
        .chain(std::iter::once(OsString::from("--")))
        .chain(rest);
    Cli::try_parse_from(argv).ok()
}

fn main() {
    logs::init();

    let Some(cli) = parse_args(std::env::args_os().collect()) else {
        println!("{}", USAGE);
        std::process::exit(1);
    };

    match transform(&cli.input, &cli.output, &ConvertOptions::default()) {
        Ok(summary) => {
            println!(
                "Converted {} records from '{}' to '{}'",
                summary.records,
                cli.input.display(),
                cli.output.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("winelist")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_two_paths() {
        let cli = parse_args(args(&["in.csv", "out.json"])).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_hyphen_paths_are_paths() {
        let cli = parse_args(args(&["-x.csv", "--help"])).unwrap();
        assert_eq!(cli.input, PathBuf::from("-x.csv"));
        assert_eq!(cli.output, PathBuf::from("--help"));

        let cli = parse_args(args(&["--", "out.json"])).unwrap();
        assert_eq!(cli.input, PathBuf::from("--"));
    }

    #[test]
    fn test_wrong_count_rejected() {
        assert!(parse_args(args(&[])).is_none());
        assert!(parse_args(args(&["--help"])).is_none());
        assert!(parse_args(args(&["-V"])).is_none());
        assert!(parse_args(args(&["--", "a.csv", "b.json"])).is_none());
    }
}
