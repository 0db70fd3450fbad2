// src/adapters/progress.rs
// Terminal output: spinners and styled status lines

use std::time::Duration;

use console::{style, Style};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Types of status messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

pub struct ProgressManager {
    use_colors: bool,
    enabled: bool,
}

impl ProgressManager {
    /// `enabled` controls whether spinners are drawn at all
    pub fn new(use_colors: bool, enabled: bool) -> Self {
        Self {
            use_colors,
            enabled,
        }
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Start a spinner with `message`; hidden when progress is disabled
    pub fn spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();

        if !self.enabled {
            pb.set_draw_target(ProgressDrawTarget::hidden());
            return pb;
        }

        let template = if self.use_colors {
            "{spinner:.cyan} {msg}"
        } else {
            "{spinner} {msg}"
        };

        if let Ok(spinner_style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template(template)
        {
            pb.set_style(spinner_style);
        }

        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    /// Prefix and colour a status line
    pub fn format_message(&self, text: &str, message_type: MessageType) -> String {
        let (symbol, line_style) = match message_type {
            MessageType::Info => ("ℹ", Style::new().blue()),
            MessageType::Success => ("✓", Style::new().green()),
            MessageType::Error => ("✗", Style::new().red()),
        };

        if self.use_colors {
            format!(
                "{} {}",
                line_style.apply_to(symbol).bold(),
                line_style.apply_to(text)
            )
        } else {
            format!("{} {}", symbol, text)
        }
    }

    pub fn format_duration(&self, duration: Duration) -> String {
        let millis = duration.as_millis();
        let text = if millis < 1000 {
            format!("{}ms", millis)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        };

        if self.use_colors {
            style(text).dim().to_string()
        } else {
            text
        }
    }
}
