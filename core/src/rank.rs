use crate::{Passage, RankedPassage};
use std::cmp::Ordering;

/// Cosine similarity of two equal-length vectors; `0.0` when either has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "vectors must share one vocabulary");
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Score passages against the question, best first, keeping at most `top_k`
/// whose score strictly exceeds `min_score`. Equal scores keep segmentation order.
pub fn rank(
    passages: &[Passage],
    passage_vectors: &[Vec<f64>],
    question_vector: &[f64],
    top_k: usize,
    min_score: f64,
) -> Vec<RankedPassage> {
    assert_eq!(passages.len(), passage_vectors.len(), "one vector per passage");
    let mut scored: Vec<RankedPassage> = passages
        .iter()
        .zip(passage_vectors)
        .map(|(p, v)| RankedPassage { passage: p.clone(), score: cosine_similarity(v, question_vector) })
        .collect();
    // sort_by is stable
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(top_k)
        .filter(|r| r.score > min_score)
        .collect()
}
