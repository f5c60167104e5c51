//! Extractive question answering over a small, ad-hoc document corpus.
//!
//! Pipeline per call: segment documents into offset-tagged passages, build
//! TF-IDF vectors over passages plus question, rank by cosine similarity, then
//! concatenate the surviving passages with their citations. Nothing is cached
//! between calls.

pub mod compose;
pub mod config;
pub mod rank;
pub mod segmenter;
pub mod tokenizer;
pub mod types;
pub mod vector;

pub use compose::{compose, FALLBACK_ANSWER};
pub use config::QaParams;
pub use types::{Answer, Citation, Document, Passage, RankedPassage, UNKNOWN_SOURCE};

/// Answer `question` from `documents`. Always returns a well-formed [`Answer`];
/// empty input of any kind yields [`Answer::fallback`].
pub fn answer(documents: &[Document], question: &str, params: &QaParams) -> Answer {
    if documents.is_empty() || question.trim().is_empty() {
        tracing::debug!(documents = documents.len(), "empty corpus or question, using fallback");
        return Answer::fallback();
    }

    let passages = segmenter::segment(documents, params.chunk_size, params.overlap);
    if passages.is_empty() {
        tracing::debug!(documents = documents.len(), "no passages produced, using fallback");
        return Answer::fallback();
    }

    let space = vector::build_vectors(&passages, question);
    let ranked = rank::rank(&passages, &space.passages, &space.question, params.top_k, params.min_score);
    tracing::debug!(
        passages = passages.len(),
        vocabulary = space.vocabulary.len(),
        hits = ranked.len(),
        top_score = ranked.first().map(|r| r.score),
        "ranked passages"
    );
    compose(&ranked)
}

/// [`answer`] with the default parameters.
pub fn answer_with_defaults(documents: &[Document], question: &str) -> Answer {
    answer(documents, question, &QaParams::default())
}
