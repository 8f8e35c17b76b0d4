use std::collections::HashSet;

/// All contiguous character windows of length `n`, deduplicated.
/// Words shorter than `n` (and `n == 0`) yield the empty set.
pub fn ngrams(word: &str, n: usize) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    if n == 0 || chars.len() < n {
        return HashSet::new();
    }
    chars.windows(n).map(|window| window.iter().collect()).collect()
}

/// Jaccard distance `1 - |A ∩ B| / |A ∪ B|`.
/// Two empty sets are identical (0.0); one empty against one non-empty is
/// maximally dissimilar (1.0).
pub fn jaccard_distance(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    1.0 - intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngrams_sliding_window() {
        let grams = ngrams("hello", 3);
        assert_eq!(grams.len(), 3);
        for g in ["hel", "ell", "llo"] {
            assert!(grams.contains(g), "missing ngram {}", g);
        }
    }

    #[test]
    fn test_ngrams_count_bound() {
        // at most len - n + 1, with equality when no window repeats
        assert_eq!(ngrams("abcdef", 2).len(), 5);
        assert_eq!(ngrams("aaaa", 2).len(), 1); // duplicates collapse
    }

    #[test]
    fn test_ngrams_word_shorter_than_n() {
        assert!(ngrams("ab", 3).is_empty());
        assert!(ngrams("", 1).is_empty());
        assert!(ngrams("abc", 0).is_empty());
    }

    #[test]
    fn test_ngrams_whole_word_window() {
        let grams = ngrams("cat", 3);
        assert_eq!(grams.len(), 1);
        assert!(grams.contains("cat"));
    }

    #[test]
    fn test_jaccard_identical_sets() {
        let a = ngrams("spelling", 3);
        assert_eq!(jaccard_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_jaccard_both_empty() {
        let empty = HashSet::new();
        assert_eq!(jaccard_distance(&empty, &empty), 0.0);
    }

    #[test]
    fn test_jaccard_one_empty() {
        let empty = HashSet::new();
        let full = ngrams("cat", 2);
        assert_eq!(jaccard_distance(&empty, &full), 1.0);
        assert_eq!(jaccard_distance(&full, &empty), 1.0);
    }

    #[test]
    fn test_jaccard_symmetric() {
        let a = ngrams("hello", 3);
        let b = ngrams("help", 3);
        assert_eq!(jaccard_distance(&a, &b), jaccard_distance(&b, &a));
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // {he, el, lo} vs {he, el, lp}: 2 shared of 4 total
        let a = ngrams("helo", 2);
        let b = ngrams("help", 2);
        assert!((jaccard_distance(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_in_unit_interval() {
        for (x, y) in [("cat", "dog"), ("cat", "cats"), ("a", "ab")] {
            let d = jaccard_distance(&ngrams(x, 2), &ngrams(y, 2));
            assert!((0.0..=1.0).contains(&d), "distance {} out of range", d);
        }
    }
}
