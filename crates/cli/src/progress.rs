use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while the blocking fetch is in flight.
/// Callers must clear it (success or failure) before writing the report.
pub(crate) fn fetch_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .expect("static spinner template is valid"),
    );
    bar.set_message("Fetching data...");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
