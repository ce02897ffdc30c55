//! Word-list formatting.

use console::style;

/// Joins words with `, `, styling each word cyan.
///
/// ```rust
/// use callout::wordlist;
/// use callout_text::uncolor;
///
/// assert_eq!(uncolor(&wordlist(&["a", "b"])), "a, b");
/// ```
pub fn wordlist<S: AsRef<str>>(words: &[S]) -> String {
    wordlist_with(words, ", ")
}

/// Joins words with a custom separator, styling each word cyan.
pub fn wordlist_with<S: AsRef<str>>(words: &[S], separator: &str) -> String {
    words
        .iter()
        .map(|word| style(word.as_ref()).cyan().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
