//! Interactive accept/edit/cancel review of a generated PR description.

use std::io::{self, BufRead, Read, Write};

use crate::describe::{PrDescription, Provenance};
use crate::output::{BOLD, CYAN, GRAY, RESET};

const RULE: &str = "─────────────────────────────────────────────";

/// What the operator decided to do with a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Use the description as shown.
    Accepted(String),
    /// Do not open this PR.
    Cancelled,
    /// Use operator-written text instead.
    Replaced(String),
}

impl ReviewOutcome {
    /// The body to submit, `None` when cancelled.
    pub fn into_body(self) -> Option<String> {
        match self {
            ReviewOutcome::Accepted(text) | ReviewOutcome::Replaced(text) => Some(text),
            ReviewOutcome::Cancelled => None,
        }
    }
}

/// Show `description` and ask whether to accept, edit or cancel it.
///
/// `n` cancels. `e` reads replacement text until end-of-input; a blank
/// replacement keeps the original. Any other answer, including an empty line
/// or end-of-input, accepts.
pub fn review_description<R, W>(
    description: &PrDescription,
    input: &mut R,
    out: &mut W,
) -> io::Result<ReviewOutcome>
where
    R: BufRead,
    W: Write,
{
    print_framed(description, out)?;

    write!(out, "\nAccept this description? (y/n/e for edit): ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_lowercase().as_str() {
        "n" => Ok(ReviewOutcome::Cancelled),
        "e" => {
            writeln!(
                out,
                "\n{CYAN}Enter your custom PR description (press Ctrl+D when done):{RESET}"
            )?;
            writeln!(out, "{GRAY}{RULE}{RESET}")?;
            out.flush()?;

            let custom = read_until_eof(input)?;
            let custom = custom.trim();
            if custom.is_empty() {
                Ok(ReviewOutcome::Accepted(description.text.clone()))
            } else {
                Ok(ReviewOutcome::Replaced(custom.to_string()))
            }
        }
        _ => Ok(ReviewOutcome::Accepted(description.text.clone())),
    }
}

fn print_framed<W: Write>(description: &PrDescription, out: &mut W) -> io::Result<()> {
    let label = match description.provenance {
        Provenance::Generated => "│         AI-GENERATED PR DESCRIPTION         │",
        Provenance::FromCommits => "│         PR DESCRIPTION FROM COMMITS         │",
    };

    writeln!(out)?;
    writeln!(out, "{BOLD}┌─────────────────────────────────────────────┐{RESET}")?;
    writeln!(out, "{BOLD}{}{RESET}", label)?;
    writeln!(out, "{BOLD}└─────────────────────────────────────────────┘{RESET}")?;
    writeln!(out, "{}", description.text)?;
    writeln!(out, "{GRAY}{RULE}{RESET}")
}

/// Reads the rest of the input. Invalid UTF-8 is replaced, not rejected.
fn read_until_eof<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
