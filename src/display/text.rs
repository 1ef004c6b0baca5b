//! Text helpers.

/// Shorten `text` to `max_len` characters, marking the cut with `suffix`.
///
/// When `suffix_counts` is true the suffix is part of the `max_len` budget;
/// otherwise it is appended after `max_len` characters of text. Text that
/// already fits is returned unchanged.
///
/// ```
/// use contact_book::display::text::truncate;
///
/// assert_eq!(truncate("Hello world", 5, "...", false), "Hello...");
/// assert_eq!(truncate("Hello world", 5, "...", true), "He...");
/// ```
pub fn truncate(text: &str, max_len: usize, suffix: &str, suffix_counts: bool) -> String {
    let text_len = text.chars().count();

    if text_len <= max_len {
        return text.to_string();
    }

    if !suffix_counts {
        return format!("{}{}", take_chars(text, max_len), suffix);
    }

    if max_len == 0 {
        return String::new();
    }

    let suffix_len = suffix.chars().count();

    // Not even the whole suffix fits: keep its tail
    if suffix_len >= max_len {
        return suffix.chars().skip(suffix_len - max_len).collect();
    }

    format!("{}{}", take_chars(text, max_len - suffix_len), suffix)
}

fn take_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}
