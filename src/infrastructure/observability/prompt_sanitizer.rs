const MAX_VISIBLE_LENGTH: usize = 100;

/// Shortens user-supplied text for logging. Questions can carry personal
/// context, so only a bounded prefix ever reaches the logs.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let visible_end = trimmed
        .char_indices()
        .nth(MAX_VISIBLE_LENGTH)
        .map(|(i, _)| i);

    match visible_end {
        Some(end) => format!("{}... ({} chars total)", &trimmed[..end], trimmed.len()),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_prompt_passes_through() {
        assert_eq!(sanitize_prompt("What color is the sky?"), "What color is the sky?");
    }

    #[test]
    fn empty_prompt_is_marked() {
        assert_eq!(sanitize_prompt("   "), "[EMPTY]");
    }

    #[test]
    fn long_prompt_is_truncated() {
        let long = "x".repeat(300);
        let sanitized = sanitize_prompt(&long);
        assert!(sanitized.starts_with(&"x".repeat(100)));
        assert!(sanitized.contains("300 chars total"));
    }

    #[test]
    fn multibyte_prompt_truncates_on_char_boundary() {
        let long = "é".repeat(150);
        let sanitized = sanitize_prompt(&long);
        assert!(sanitized.contains("chars total"));
    }
}
