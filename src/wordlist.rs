// ZH-Check Word List Parsing
// Plain-text vocabulary lists: one entry per line, '#' comments

/// Extract the vocabulary entry from one word-list line
///
/// The line format allows a trailing `#` comment and a tab-separated
/// annotation column; both are stripped before matching. Blank and
/// comment-only lines yield `None`.
///
/// # Example
/// ```
/// use zh_check::wordlist::parse_line;
///
/// assert_eq!(parse_line("你好\tnǐ hǎo # greeting"), Some("你好"));
/// assert_eq!(parse_line("# just a comment"), None);
/// assert_eq!(parse_line("   "), None);
/// ```
pub fn parse_line(line: &str) -> Option<&str> {
    let entry = line
        .split('#')
        .next()
        .unwrap_or("")
        .split('\t')
        .next()
        .unwrap_or("")
        .trim();
    if entry.is_empty() {
        None
    } else {
        Some(entry)
    }
}

/// Parse every vocabulary entry out of one word-list document
///
/// An entry containing internal whitespace splits into separate words;
/// malformed lines simply contribute nothing. Callers union the results
/// across however many files make up a list.
pub fn parse_words(content: &str) -> Vec<String> {
    let mut words = Vec::new();
    for line in content.lines() {
        if let Some(entry) = parse_line(line) {
            for word in entry.split_whitespace() {
                words.push(word.to_string());
            }
        }
    }
    words
}
