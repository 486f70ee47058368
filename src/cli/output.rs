//! Output formatting for CLI commands
//!
//! Shared helpers for human-readable output. Colors respect the
//! NO_COLOR env var (handled by `colored`).

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for document IDs
    pub fn document_id(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for chunk ordinals
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Format relative time (e.g., "2h ago", "3d ago")
pub fn format_relative_time(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(*timestamp);

    if duration.num_seconds() < 0 {
        return "in the future".to_string();
    }

    let days = duration.num_days();
    let hours = duration.num_hours();
    let mins = duration.num_minutes();

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if mins > 0 {
        format!("{mins}m ago")
    } else {
        "just now".to_string()
    }
}

/// Shorten `s` to at most `max_chars` characters, ending in "..."
pub fn truncate_words(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
