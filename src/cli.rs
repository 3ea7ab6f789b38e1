// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing and usage text.
use anyhow::{Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub faq_path: Option<PathBuf>,
    pub threshold: Option<f32>,
    pub help: bool,
}

/// Parses arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => parsed.help = true,
            "--root" | "-r" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("{} requires a path", args[i]))?;
                parsed.root = Some(PathBuf::from(value));
                i += 1;
            }
            "--faq" | "-f" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("{} requires a file", args[i]))?;
                parsed.faq_path = Some(PathBuf::from(value));
                i += 1;
            }
            "--threshold" | "-t" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("{} requires a number", args[i]))?;
                let threshold: f32 = value
                    .parse()
                    .map_err(|_| anyhow!("Invalid threshold '{}'", value))?;
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(anyhow!("Threshold must be between 0 and 1, got {}", value));
                }
                parsed.threshold = Some(threshold);
                i += 1;
            }
            other => return Err(anyhow!("Unknown argument '{}'", other)),
        }
        i += 1;
    }
    Ok(parsed)
}

pub fn print_help(binary_name: &str) {
    println!(
        "StudyBuddy v{} - a student assistant for tasks and common questions",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>] [--faq <file.json>] [--threshold <0..1>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>       Use a different directory for config and data.");
    println!("    -f, --faq <file>        Load FAQ questions/answers from a JSON file.");
    println!("    -t, --threshold <n>     Minimum similarity for an FAQ answer (default 0.22).");
    println!("    -h, --help              Show this help message.");
    println!();
    println!("CHAT COMMANDS:");
    println!("    add task: <text> [by <date>]   Add a task (dates: 2026-01-25, 25/1/2026, 25 Jan)");
    println!("    show tasks                     List tasks");
    println!("    delete task <n>                Delete a task");
    println!("    help / exit                    Help, or leave the chat");
    println!("    anything else                  Asked as a question");
}
