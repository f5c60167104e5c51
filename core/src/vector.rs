use crate::tokenizer::tokenize;
use crate::Passage;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Dense TF-IDF vectors over the vocabulary of one passage corpus plus its question.
#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    /// Sorted, deduplicated terms; index `i` of every vector weights `vocabulary[i]`.
    pub vocabulary: Vec<String>,
    pub idf: Vec<f64>,
    pub question: Vec<f64>,
    /// Aligned with the input passages.
    pub passages: Vec<Vec<f64>>,
}

/// Smoothed inverse document frequency: `ln(n / (1 + df)) + 1`.
pub fn idf(df: usize, n: usize) -> f64 {
    (n as f64 / (1.0 + df as f64)).ln() + 1.0
}

/// Count of each term divided by sequence length. Empty input gives an empty map.
pub fn term_frequencies(tokens: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for t in tokens {
        *counts.entry(t.as_str()).or_insert(0) += 1;
    }
    let total = tokens.len() as f64;
    counts.into_iter().map(|(t, c)| (t, c as f64 / total)).collect()
}

/// Build the question vector and one vector per passage.
///
/// The question counts as a document for df and `N`.
pub fn build_vectors(passages: &[Passage], question: &str) -> VectorSpace {
    if passages.is_empty() {
        return VectorSpace::default();
    }
    let passage_tokens: Vec<Vec<String>> = passages.iter().map(|p| tokenize(&p.text)).collect();
    let question_tokens = tokenize(question);

    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for seq in passage_tokens.iter().chain(std::iter::once(&question_tokens)) {
        let unique: HashSet<&str> = seq.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }
    let n = passage_tokens.len() + 1;

    // BTreeMap iteration yields the vocabulary already sorted.
    let vocabulary: Vec<String> = df.keys().map(|t| t.to_string()).collect();
    let idf_weights: Vec<f64> = df.values().map(|&d| idf(d, n)).collect();

    let vectorize = |tokens: &[String]| -> Vec<f64> {
        let tf = term_frequencies(tokens);
        vocabulary
            .iter()
            .zip(&idf_weights)
            .map(|(term, w)| tf.get(term.as_str()).map_or(0.0, |f| f * w))
            .collect()
    };

    let question = vectorize(&question_tokens);
    let passages = passage_tokens.iter().map(|t| vectorize(t)).collect();
    VectorSpace { vocabulary, idf: idf_weights, question, passages }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(text: &str) -> Passage {
        Passage { text: text.into(), source: "s".into(), start: 0, end: text.len() }
    }

    #[test]
    fn idf_is_one_for_term_in_all_but_one_sequence() {
        // df = n - 1 makes the log term vanish
        assert!((idf(2, 3) - 1.0).abs() < 1e-12);
        assert!(idf(1, 3) > idf(2, 3));
    }

    #[test]
    fn vocabulary_is_sorted_union() {
        let space = build_vectors(&[passage("beta alpha"), passage("gamma")], "Alpha delta");
        assert_eq!(space.vocabulary, vec!["alpha", "beta", "delta", "gamma"]);
        assert_eq!(space.passages.len(), 2);
        assert!(space.passages.iter().all(|v| v.len() == 4));
        assert_eq!(space.question.len(), 4);
    }

    #[test]
    fn weights_are_tf_times_idf() {
        let space = build_vectors(&[passage("a a b")], "c");
        // n = 2; df(a) = df(b) = df(c) = 1
        let w = idf(1, 2);
        assert_eq!(space.idf, vec![w, w, w]);
        assert!((space.passages[0][0] - (2.0 / 3.0) * w).abs() < 1e-12);
        assert!((space.passages[0][1] - (1.0 / 3.0) * w).abs() < 1e-12);
        assert_eq!(space.passages[0][2], 0.0);
        assert!((space.question[2] - w).abs() < 1e-12);
    }

    #[test]
    fn punctuation_only_passage_has_zero_vector() {
        let space = build_vectors(&[passage("... !!! ---"), passage("word")], "word");
        assert!(space.passages[0].iter().all(|&w| w == 0.0));
    }

    #[test]
    fn empty_corpus_builds_nothing() {
        let space = build_vectors(&[], "anything");
        assert!(space.vocabulary.is_empty());
        assert!(space.question.is_empty());
    }
}
