use crate::{Answer, Citation, RankedPassage};

pub const FALLBACK_ANSWER: &str = "No relevant article found.";

impl Answer {
    pub fn fallback() -> Self {
        Self { text: FALLBACK_ANSWER.to_string(), citations: Vec::new() }
    }

    pub fn is_fallback(&self) -> bool {
        self.citations.is_empty() && self.text == FALLBACK_ANSWER
    }
}

/// Join ranked passage texts with single spaces and cite each one, in ranked order.
pub fn compose(ranked: &[RankedPassage]) -> Answer {
    if ranked.is_empty() {
        return Answer::fallback();
    }
    let text = ranked
        .iter()
        .map(|r| r.passage.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let citations = ranked.iter().map(|r| Citation::from(&r.passage)).collect();
    Answer { text, citations }
}
