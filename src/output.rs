//! CLI status-line formatting.
//!
//! Every terminal case prints exactly one human-readable line. Format
//! functions are pure (return the string, no I/O) so tests can assert on
//! the text; [`print_outcome`] is the thin stdout wrapper `main` calls.

use crate::run::Outcome;
use crate::scan::EXCLUDED_PAGE;

/// The status line for a finished run.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::NoScreenshots => "No numbered PNG screenshots found in this directory.".to_string(),
        Outcome::NothingAfterExclusion => {
            format!("No pages left for the collage after excluding page {EXCLUDED_PAGE}.")
        }
        Outcome::Written(path) => format!("Collage created: {}", path.display()),
    }
}

pub fn print_outcome(outcome: &Outcome) {
    println!("{}", format_outcome(outcome));
}
