//! Colored terminal output helpers.
//!
//! All user-facing status lines go through these so the color handling (and
//! the decision to color at all) lives in one place. Colors are applied only
//! when stdout/stderr is a terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn print_colored(stream: &mut StandardStream, color: Color, message: &str) {
    // Output helpers never fail the operation they are reporting on
    let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)));
    let _ = writeln!(stream, "{message}");
    let _ = stream.reset();
}

/// Prints a green success line to stdout.
pub fn print_success(message: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    print_colored(&mut stdout, Color::Green, message);
}

/// Prints a cyan informational line to stdout.
pub fn print_info(message: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    print_colored(&mut stdout, Color::Cyan, message);
}

/// Prints a yellow warning line to stderr.
pub fn print_warning(message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    print_colored(&mut stderr, Color::Yellow, message);
}

/// Prints a red error line to stderr.
pub fn print_error(message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    print_colored(&mut stderr, Color::Red, message);
}
