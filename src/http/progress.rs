//! Download progress display.

use indicatif::{ProgressBar, ProgressStyle};

const SIZED_TEMPLATE: &str =
    "{prefix:.bold.cyan} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})";
const UNSIZED_TEMPLATE: &str = "{prefix:.bold.cyan} {spinner:.cyan} {bytes} ({bytes_per_sec})";

/// Creates a byte progress bar for a download of `total` bytes.
///
/// Without a known length the bar shows a spinner and the byte count.
/// indicatif draws to stderr and stays hidden when stderr is not a terminal.
pub(crate) fn download_bar(total: Option<u64>) -> ProgressBar {
    let (bar, template) = match total {
        Some(len) => (ProgressBar::new(len), SIZED_TEMPLATE),
        None => (ProgressBar::no_length(), UNSIZED_TEMPLATE),
    };

    if let Ok(style) = ProgressStyle::with_template(template) {
        bar.set_style(style.progress_chars("━╸━"));
    }
    bar.set_prefix("Downloading");
    bar
}
