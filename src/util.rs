//! Utility functions for pressmark

/// Counts words in a markdown body.
///
/// Whitespace-separated tokens; markdown punctuation counts with its word.
/// Good enough for reading time estimates.
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Formats a word count as a reading time estimate.
///
/// Uses 200 words per minute, rounding up, with a one minute floor so even
/// short articles display a stable label.
///
/// # Arguments
///
/// * `words`: Body word count
///
/// # Returns
///
/// Label like "1 min read" or "7 min read"
pub fn format_reading_time(words: usize) -> String {
    const WORDS_PER_MINUTE: usize = 200;

    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("# Heading\n\nTwo words."), 4);
    }

    #[test]
    fn test_reading_time_floor() {
        assert_eq!(format_reading_time(0), "1 min read");
        assert_eq!(format_reading_time(50), "1 min read");
        assert_eq!(format_reading_time(200), "1 min read");
    }

    #[test]
    fn test_reading_time_rounds_up() {
        assert_eq!(format_reading_time(201), "2 min read");
        assert_eq!(format_reading_time(1000), "5 min read");
        assert_eq!(format_reading_time(1001), "6 min read");
    }
}
