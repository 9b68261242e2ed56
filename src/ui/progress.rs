use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 스피너 스타일 (backend 응답 대기 중)
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// 완료 메시지와 함께 스피너 종료
pub fn finish_spinner(spinner: &ProgressBar, message: &str) {
    spinner.finish_with_message(format!("{} {}", "✓".green(), message));
}

/// 에러 메시지와 함께 스피너 종료
pub fn fail_spinner(spinner: &ProgressBar, message: &str) {
    spinner.finish_with_message(format!("{} {}", "✗".red(), message));
}
