use std::collections::HashSet;
use std::fs;
use std::io;

/// Ordered, lowercased word list. Built once, never mutated afterwards, so it
/// can be shared by reference across concurrent queries.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for word in words {
            let lower = word.as_ref().trim().to_lowercase();
            if lower.is_empty() {
                continue;
            }
            if seen.insert(lower.clone()) {
                out.push(lower);
            }
        }
        Vocabulary { words: out }
    }

    /// One word per line.
    pub fn from_word_list_file(file_path: &str) -> io::Result<Self> {
        let content = fs::read_to_string(file_path)?;
        let vocabulary = Self::new(content.lines());
        log::debug!("loaded {} words from {}", vocabulary.len(), file_path);
        Ok(vocabulary)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
