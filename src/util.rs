use indicatif::{ProgressBar, ProgressStyle};

pub(crate) fn create_progress_bar(total_steps: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_steps);

    let style = ProgressStyle::default_bar()
        .template("[{spinner:.green} {elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(msg.to_owned());

    pb
}

/// Progress bar when enabled, otherwise one that draws nothing
pub(crate) fn step_progress(enabled: bool, total_steps: u64, msg: &str) -> ProgressBar {
    if enabled {
        create_progress_bar(total_steps, msg)
    } else {
        ProgressBar::hidden()
    }
}
