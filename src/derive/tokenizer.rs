//! Tokenizer and stopword capabilities used by keyword extraction

use std::collections::HashSet;

/// Splits text into word tokens
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Decides whether a lower-cased token is a stopword
pub trait Stopwords: Send + Sync {
    fn is_stopword(&self, word: &str) -> bool;
}

/// Splits text into word tokens and punctuation tokens
///
/// A word is a run of alphanumeric characters, optionally joined by single
/// inner `-` or `.` characters, so `state-of-the-art` and `2.5` stay whole.
/// Any other non-whitespace run becomes its own token: `"Hello, world."`
/// becomes `["Hello", ",", "world", "."]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

fn is_joiner(c: char) -> bool {
    c == '-' || c == '.'
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_word = false;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c.is_whitespace() {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                in_word = false;
                continue;
            }

            if c.is_alphanumeric() {
                if !current.is_empty() && !in_word {
                    tokens.push(std::mem::take(&mut current));
                }
                in_word = true;
                current.push(c);
                continue;
            }

            // Inner joiner: the word continues past it
            if in_word && is_joiner(c) && chars.peek().is_some_and(|n| n.is_alphanumeric()) {
                current.push(c);
                continue;
            }

            if !current.is_empty() && in_word {
                tokens.push(std::mem::take(&mut current));
            }
            in_word = false;
            current.push(c);
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }
}

/// The standard English stopword list
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// English stopwords
#[derive(Debug, Clone)]
pub struct EnglishStopwords {
    words: HashSet<&'static str>,
}

impl EnglishStopwords {
    pub fn new() -> Self {
        Self {
            words: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for EnglishStopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords for EnglishStopwords {
    fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// A caller-supplied stopword list
#[derive(Debug, Clone, Default)]
pub struct StopwordSet(HashSet<String>);

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(|w| w.into().to_lowercase()).collect())
    }
}

impl Stopwords for StopwordSet {
    fn is_stopword(&self, word: &str) -> bool {
        self.0.contains(word)
    }
}
