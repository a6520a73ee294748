use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "the", "of", "and", "a", "to", "in", "is", "you", "that", "it",
            "he", "was", "for", "on", "are", "as", "with", "his", "they",
            "i", "at", "be", "this", "have", "from", "or", "one", "had",
            "by", "word", "but", "not", "what", "all", "were", "we", "when",
            "your", "can", "said", "there", "use", "an", "each", "which",
            "she", "do", "how", "their", "if", "will", "up", "other",
            "about", "out", "many", "then", "them", "these", "so", "some",
            "her", "would", "make", "like", "him", "into", "time", "has",
            "look", "two", "more", "write", "go", "see", "number", "no",
            "way", "could", "people", "my", "than", "first", "water",
            "been", "call", "who", "oil", "its", "now", "find", "long",
            "down", "day", "did", "get", "come", "made", "may", "part",
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Lowercase the text, drop every character that is not alphanumeric or
/// whitespace, then split on whitespace. Stop words are NOT removed here;
/// callers that feed the term-frequency table use `tokenize` instead.
pub fn preprocess(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Preprocess plus stop-word removal: the token stream the scoring layer
/// sees. No stemming and no fuzzy matching; similarity is on exact
/// lowercased tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    preprocess(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        let t = preprocess("Hello, World! It's 2024.");
        assert_eq!(t, vec!["hello", "world", "its", "2024"]);
    }

    #[test]
    fn splits_on_any_whitespace() {
        let t = preprocess("one\ttwo\nthree  four");
        assert_eq!(t, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn tokenize_filters_stopwords() {
        let t = tokenize("The quick brown fox and the lazy dog");
        assert!(!t.contains(&"the".to_string()));
        assert!(!t.contains(&"and".to_string()));
        assert!(t.contains(&"quick".to_string()));
        assert!(t.contains(&"fox".to_string()));
    }

    #[test]
    fn stopwords_checked_after_punctuation_removal() {
        // "it's" becomes "its", which is on the stop list.
        let t = tokenize("it's a fox");
        assert_eq!(t, vec!["fox"]);
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert!(preprocess("").is_empty());
        assert!(preprocess("!!! ??? ---").is_empty());
    }
}
