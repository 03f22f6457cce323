/// Whole percentage shown next to a progress bar
pub fn percent_label(progress: f32) -> String {
    format!("{}%", progress.clamp(0.0, 100.0).round() as u32)
}

/// Shorten long text for a single-line label, keeping the start
pub fn truncate_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(42.5), "43%");
        assert_eq!(percent_label(99.4), "99%");
        assert_eq!(percent_label(100.0), "100%");
    }

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("short", 10), "short");
        assert_eq!(truncate_display("https://example.com/watch", 8), "https:/…");
        assert_eq!(truncate_display("видеоролик", 6), "видео…");
    }
}
