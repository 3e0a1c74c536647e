use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::output::{GRAY, RESET};

const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner shown while a blocking call is in flight.
///
/// Cleared from the terminal when finished or dropped.
pub struct WaitSpinner {
    spinner: ProgressBar,
}

impl WaitSpinner {
    pub fn new(message: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars(SPINNER_CHARS)
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("{GRAY}{}{RESET}", message));
        spinner.enable_steady_tick(TICK_INTERVAL);
        Self { spinner }
    }

    pub fn finish(self) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for WaitSpinner {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}
