use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

/// Global quiet setting
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message unless quiet
pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{}", message.green());
    }
}

/// Print an error to stderr. Never suppressed.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", "Error:".red().bold());
}
