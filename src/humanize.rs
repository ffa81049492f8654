//! Conversion of identifier-style names into readable phrases.
//!
//! Step and scenario titles are derived from method names such as
//! `when_user_logs_in` or `wennKontoGesperrtIst`. The host framework owns the
//! exact wording, so humanisation sits behind the [`Humanizer`] trait;
//! [`DefaultHumanizer`] mirrors the conventions most hosts use.

#[cfg(test)]
use mockall::automock;

/// Turns an identifier into a space-separated human-readable phrase.
#[cfg_attr(test, automock)]
pub trait Humanizer: Send + Sync {
    /// Humanise `identifier`.
    fn humanize(&self, identifier: &str) -> String;
}

/// Splits `snake_case` and `camelCase` identifiers into words.
///
/// Acronyms such as `HTTP` keep their casing, every other word is lowercased
/// and the first letter of the phrase is capitalised. Text that already
/// contains spaces is treated as written by hand and only trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHumanizer;

impl Humanizer for DefaultHumanizer {
    fn humanize(&self, identifier: &str) -> String {
        let trimmed = identifier.trim();
        if trimmed.contains(char::is_whitespace) {
            return trimmed.to_owned();
        }
        let words: Vec<String> = split_words(trimmed)
            .into_iter()
            .map(|word| normalise_case(&word))
            .collect();
        capitalise_first(&words.join(" "))
    }
}

/// Returns identifiers unchanged apart from trimming.
///
/// Selected when title humanisation is switched off in the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimHumanizer;

impl Humanizer for VerbatimHumanizer {
    fn humanize(&self, identifier: &str) -> String {
        identifier.trim().to_owned()
    }
}

fn split_words(identifier: &str) -> Vec<String> {
    let chars: Vec<char> = identifier.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (index, &ch) in chars.iter().enumerate() {
        if ch == '_' {
            flush(&mut current, &mut words);
            continue;
        }

        let prev = index.checked_sub(1).and_then(|i| chars.get(i)).copied();
        let next = chars.get(index + 1).copied();
        if starts_new_word(prev, ch, next) {
            flush(&mut current, &mut words);
        }
        current.push(ch);
    }
    flush(&mut current, &mut words);
    words
}

fn starts_new_word(prev: Option<char>, ch: char, next: Option<char>) -> bool {
    let Some(prev_ch) = prev else {
        return false;
    };
    if prev_ch == '_' {
        return false;
    }
    if ch.is_uppercase() {
        let after_lower = prev_ch.is_lowercase() || prev_ch.is_ascii_digit();
        let ends_acronym = prev_ch.is_uppercase() && next.is_some_and(char::is_lowercase);
        return after_lower || ends_acronym;
    }
    if ch.is_ascii_digit() {
        return !prev_ch.is_ascii_digit();
    }
    prev_ch.is_ascii_digit()
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn normalise_case(word: &str) -> String {
    let is_acronym = word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase());
    if is_acronym || word == "I" {
        word.to_owned()
    } else {
        word.to_lowercase()
    }
}

fn capitalise_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
