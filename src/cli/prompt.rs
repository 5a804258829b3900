//! Interactive prompting.
//!
//! The reader and the interactivity flag are injected so tests can drive
//! every prompt-bearing code path with a scripted buffer instead of real
//! stdin. On a non-interactive stdin every prompt falls back to its default
//! with a warning instead of blocking.

use std::io::{self, BufRead, BufReader, IsTerminal, Stdin, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::workflow::ScanPrompts;

/// Reads answers to interactive prompts from an injected source.
pub struct Prompter<R: BufRead> {
    reader: R,
    interactive: bool,
}

impl Prompter<BufReader<Stdin>> {
    /// Prompter over real stdin; interactive only when stdin is a terminal.
    pub fn stdin() -> Self {
        let interactive = io::stdin().is_terminal();
        Self::new(BufReader::new(io::stdin()), interactive)
    }
}

impl<R: BufRead> Prompter<R> {
    /// Prompter over an arbitrary reader, mainly for tests.
    pub fn new(reader: R, interactive: bool) -> Self {
        Self {
            reader,
            interactive,
        }
    }

    /// Asks a single-line question. Empty input (or a non-interactive stdin,
    /// or EOF) yields `default`.
    pub fn line(&mut self, message: &str, default: &str) -> Result<String> {
        if !self.interactive {
            eprintln!("warning: stdin is not interactive, using default '{default}'");
            return Ok(default.to_string());
        }

        print!("{message} (default: {default}): ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let bytes = self
            .reader
            .read_line(&mut input)
            .context("Failed to read user input")?;
        if bytes == 0 {
            return Ok(default.to_string());
        }

        let input = input.trim();
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input.to_string())
        }
    }

    /// Asks a yes/no question. Empty input yields `default_yes`.
    pub fn confirm(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        if !self.interactive {
            eprintln!(
                "warning: stdin is not interactive, assuming '{}'",
                if default_yes { "yes" } else { "no" }
            );
            return Ok(default_yes);
        }

        let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
        loop {
            print!("{message} {hint} ");
            io::stdout().flush().context("Failed to flush stdout")?;

            let mut input = String::new();
            let bytes = self
                .reader
                .read_line(&mut input)
                .context("Failed to read user input")?;
            if bytes == 0 {
                return Ok(default_yes);
            }

            match input.trim().to_lowercase().as_str() {
                "" => return Ok(default_yes),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please answer 'y' or 'n'."),
            }
        }
    }

    /// Asks the user to pick one of `options`. Empty input yields `default`;
    /// anything not in `options` re-prompts.
    pub fn select(&mut self, message: &str, options: &[&str], default: &str) -> Result<String> {
        if !self.interactive {
            eprintln!("warning: stdin is not interactive, using default '{default}'");
            return Ok(default.to_string());
        }

        loop {
            let answer = self.line(&format!("{message} ({})", options.join(", ")), default)?;
            if options.contains(&answer.as_str()) {
                return Ok(answer);
            }
            println!("Please choose one of: {}", options.join(", "));
        }
    }

    /// Captures a multi-line answer; an empty line (or EOF) terminates input.
    pub fn multi_line(&mut self, message: &str) -> Result<String> {
        println!("{message}");

        let mut lines = Vec::new();
        loop {
            let mut input = String::new();
            let bytes = self
                .reader
                .read_line(&mut input)
                .context("Failed to read user input")?;
            if bytes == 0 {
                break;
            }

            let line = input.trim();
            if line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }

        Ok(lines.join("\n"))
    }
}

/// [`ScanPrompts`] implementation backed by a [`Prompter`], used by the
/// `init` and `sync` commands.
pub struct InteractiveScanPrompts<'a, R: BufRead> {
    prompter: &'a mut Prompter<R>,
}

impl<'a, R: BufRead> InteractiveScanPrompts<'a, R> {
    /// Wraps a prompter for the duration of one scan.
    pub fn new(prompter: &'a mut Prompter<R>) -> Self {
        Self { prompter }
    }
}

impl<R: BufRead> ScanPrompts for InteractiveScanPrompts<'_, R> {
    fn workflow_label(&mut self, dir: &Path, default: &str) -> Result<String> {
        self.prompter.line(
            &format!("Detected workflow in {}. Enter workflow name", dir.display()),
            default,
        )
    }

    fn step_label(&mut self, path: &Path, default: &str) -> Result<String> {
        self.prompter.line(
            &format!("Detected step in {}. Enter step namespace", path.display()),
            default,
        )
    }

    fn confirm_removal(&mut self, key: &str) -> Result<bool> {
        // Default keeps the entry; removal has to be an explicit yes
        self.prompter.confirm(
            &format!("'{key}' was not found in the project anymore. Remove it from the config?"),
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_returns_default_on_empty_input() {
        let mut prompter = Prompter::new(Cursor::new("\n"), true);
        assert_eq!(prompter.line("Name", "fallback").unwrap(), "fallback");
    }

    #[test]
    fn line_returns_trimmed_input() {
        let mut prompter = Prompter::new(Cursor::new("  Auth  \n"), true);
        assert_eq!(prompter.line("Name", "fallback").unwrap(), "Auth");
    }

    #[test]
    fn non_interactive_prompter_always_uses_defaults() {
        let mut prompter = Prompter::new(Cursor::new("typed-anyway\n"), false);
        assert_eq!(prompter.line("Name", "fallback").unwrap(), "fallback");
        assert!(prompter.confirm("Sure?", true).unwrap());
        assert!(!prompter.confirm("Sure?", false).unwrap());
    }

    #[test]
    fn confirm_parses_yes_and_no() {
        let mut prompter = Prompter::new(Cursor::new("y\nno\nwhat\nyes\n"), true);
        assert!(prompter.confirm("Sure?", false).unwrap());
        assert!(!prompter.confirm("Sure?", true).unwrap());
        // "what" re-prompts, then "yes" is accepted
        assert!(prompter.confirm("Sure?", false).unwrap());
    }

    #[test]
    fn confirm_returns_default_at_eof() {
        let mut prompter = Prompter::new(Cursor::new(""), true);
        assert!(prompter.confirm("Sure?", true).unwrap());
    }

    #[test]
    fn select_rejects_unknown_options() {
        let mut prompter = Prompter::new(Cursor::new("bogus\nfix\n"), true);
        let choice = prompter
            .select("Commit type", &["add", "fix"], "fix")
            .unwrap();
        assert_eq!(choice, "fix");
    }

    #[test]
    fn multi_line_stops_at_blank_line() {
        let mut prompter = Prompter::new(Cursor::new("first\nsecond\n\nignored\n"), true);
        assert_eq!(prompter.multi_line("Message:").unwrap(), "first\nsecond");
    }

    #[test]
    fn multi_line_stops_at_eof() {
        let mut prompter = Prompter::new(Cursor::new("only line"), true);
        assert_eq!(prompter.multi_line("Message:").unwrap(), "only line");
    }
}
