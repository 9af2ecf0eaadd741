//! Tagline prompt and output cleanup

/// Completion prompt for a list of genres
pub fn build_prompt(genres: &[String]) -> String {
    format!(
        "Write a cool and unique tagline for user whose top genre in music are: {} Give output just the tagline",
        genres.join(", ")
    )
}

/// Trim the completion and drop quotes the model wraps it in
pub fn clean_tagline(raw: &str) -> String {
    let quotes: &[char] = &['"', '\'', '\u{201c}', '\u{201d}'];
    raw.trim().trim_matches(quotes).trim().to_string()
}
