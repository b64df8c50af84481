//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};

/// Byte-progress bar for reading a file of known size.
pub fn read_bar(total_bytes: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}
